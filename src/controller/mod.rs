//! Session connection controller
//!
//! This module provides the `ConnectionController` abstraction that owns:
//! - The session state machine (idle → connecting → connected → failed)
//! - Credential validation before a connect is issued
//! - Connect/disconnect commands to the room engine
//! - Folding room notifications into the transcript log

mod controller;
mod state;

pub use controller::ConnectionController;
pub use state::{ConnectError, Credentials, SessionState, SessionStatus};
