use crate::controller::ConnectionController;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single session controller the handlers read from and command
    pub controller: Arc<ConnectionController>,

    /// Warning set at startup if the audio session failed to activate
    pub audio_warning: Option<String>,
}

impl AppState {
    pub fn new(controller: Arc<ConnectionController>) -> Self {
        Self {
            controller,
            audio_warning: None,
        }
    }

    pub fn with_audio_warning(mut self, warning: Option<String>) -> Self {
        self.audio_warning = warning;
        self
    }
}
