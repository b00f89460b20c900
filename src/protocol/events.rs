use serde::{Deserialize, Serialize};

/// The only event type the controller acts on
pub const TRANSCRIPTION_EVENT: &str = "transcription";

/// A decoded data-channel event
///
/// Ephemeral: folded into a transcript entry or dropped, never stored.
/// Unrecognized wire fields are ignored; unrecognized `type` values decode
/// successfully and are skipped by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundDataEvent {
    /// Event discriminator (required on the wire)
    #[serde(rename = "type")]
    pub event_type: String,

    /// Spoken text, meaningful when `type` is `transcription`
    #[serde(default)]
    pub text: Option<String>,

    /// Identity of the participant that produced the event
    #[serde(
        default,
        rename = "senderIdentity",
        alias = "sender_identity",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender_identity: Option<String>,
}

impl InboundDataEvent {
    pub fn is_transcription(&self) -> bool {
        self.event_type == TRANSCRIPTION_EVENT
    }
}
