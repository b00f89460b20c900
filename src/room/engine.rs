use super::events::RoomEvent;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors reported by a room engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room connect failed: {0}")]
    Connect(String),

    #[error("room subscription failed: {0}")]
    Subscribe(String),
}

/// Room engine trait
///
/// The boundary to the external real-time media engine. `connect` issues
/// the join command and returns a channel receiver over which the engine
/// pushes [`RoomEvent`] notifications; success is observed via the first
/// roster notification, failure via a `SessionFailed` event (or an
/// immediate `Err`). Engines must keep pushing events in the order the
/// room produced them.
#[async_trait::async_trait]
pub trait RoomEngine: Send + Sync {
    /// Join the room at `server_url`, authenticating with `token`
    ///
    /// Returns a channel receiver that will receive room notifications
    async fn connect(
        &mut self,
        server_url: &str,
        token: &str,
    ) -> Result<mpsc::Receiver<RoomEvent>, RoomError>;

    /// Leave the room and release the event subscription
    async fn disconnect(&mut self) -> Result<(), RoomError>;

    /// Check if the engine currently holds a live room session
    fn is_connected(&self) -> bool;

    /// Get engine name for logging
    fn name(&self) -> &str;
}
