//! Data-channel wire protocol
//!
//! The assistant sends structured side-channel messages (transcription
//! events and friends) over the room's data channel as UTF-8 JSON objects.
//! This module holds the wire type and the pure decoder that turns raw
//! payload bytes into a typed event.

mod decoder;
mod events;

pub use decoder::{decode, DecodeError};
pub use events::{InboundDataEvent, TRANSCRIPTION_EVENT};
