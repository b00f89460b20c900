//! Audio session lifecycle boundary
//!
//! Device and OS audio-session management lives outside the session core.
//! The application attempts `start` once at startup and calls `stop` on
//! teardown; a start failure is surfaced as a user-visible warning and
//! never touches the connection state machine.

use anyhow::Result;
use tracing::info;

/// Audio session lifecycle trait
#[async_trait::async_trait]
pub trait AudioSession: Send + Sync {
    /// Activate the platform audio session
    async fn start(&mut self) -> Result<()>;

    /// Deactivate the platform audio session
    async fn stop(&mut self);

    /// Check if the session is currently active
    fn is_active(&self) -> bool;

    /// Get session name for logging
    fn name(&self) -> &str;
}

/// No-op audio session for headless runs and platforms without capture
#[derive(Debug, Default)]
pub struct DisabledAudioSession {
    active: bool,
}

impl DisabledAudioSession {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AudioSession for DisabledAudioSession {
    async fn start(&mut self) -> Result<()> {
        info!("Audio capture disabled, session runs without a microphone");
        self.active = true;
        Ok(())
    }

    async fn stop(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
