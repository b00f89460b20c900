use serde::{Deserialize, Serialize};

/// A remote participant currently present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    pub identity: String,
}

impl ParticipantInfo {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

/// Notifications pushed by the room engine while a session is live
///
/// Delivered in arrival order over the receiver handed out by
/// [`RoomEngine::connect`](super::RoomEngine::connect).
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    /// The room roster changed; carries every participant present after
    /// the change. The first roster event of an attempt doubles as the
    /// readiness signal (the room has been joined).
    RosterChanged(Vec<ParticipantInfo>),

    /// A data-channel payload arrived. Bytes are forwarded verbatim;
    /// decoding is the controller's job.
    DataReceived {
        payload: Vec<u8>,
        sender_identity: Option<String>,
    },

    /// The session died (network loss, auth rejection, room closed)
    SessionFailed(String),
}
