pub mod audio;
pub mod config;
pub mod controller;
pub mod http;
pub mod init;
pub mod protocol;
pub mod room;
pub mod transcript;

pub use audio::{AudioSession, DisabledAudioSession};
pub use config::Config;
pub use controller::{
    ConnectError, ConnectionController, Credentials, SessionState, SessionStatus,
};
pub use http::{create_router, AppState};
pub use init::ensure_initialized;
pub use protocol::{decode, DecodeError, InboundDataEvent, TRANSCRIPTION_EVENT};
pub use room::{NatsRoom, ParticipantInfo, RoomEngine, RoomError, RoomEvent};
pub use transcript::{TranscriptEntry, TranscriptLog, SYSTEM_SPEAKER};
