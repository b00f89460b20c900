mod engine;
mod events;
mod nats;

pub use engine::{RoomEngine, RoomError};
pub use events::{ParticipantInfo, RoomEvent};
pub use nats::NatsRoom;
