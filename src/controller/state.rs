use thiserror::Error;

/// Connection lifecycle state
///
/// Exactly one value is owned by the controller at any time. `Failed` is
/// terminal until the next connect request, which re-validates credentials
/// and restarts the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Connected,
    Failed(String),
}

impl SessionState {
    /// Whether a session attempt is in flight or established
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Connecting | SessionState::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Connecting => "connecting",
            SessionState::Connected => "connected",
            SessionState::Failed(_) => "failed",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SessionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Credentials required to join a room
///
/// Both fields are opaque to the controller; only emptiness is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub server_url: String,
    pub token: String,
}

impl Credentials {
    pub fn new(server_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: token.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConnectError> {
        if self.server_url.is_empty() {
            return Err(ConnectError::MissingServerUrl);
        }
        if self.token.is_empty() {
            return Err(ConnectError::MissingToken);
        }
        Ok(())
    }
}

/// Pre-connect validation failures
///
/// Local and recoverable: state is left untouched and a corrected connect
/// request may follow at any time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("server URL is required")]
    MissingServerUrl,

    #[error("token is required")]
    MissingToken,
}

/// Observable controller status
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    /// Current lifecycle state
    pub state: SessionState,

    /// Most recent user-visible error, if any
    pub last_error: Option<String>,

    /// Size of the room roster as last reported by the engine
    pub remote_participants: usize,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            last_error: None,
            remote_participants: 0,
        }
    }
}
