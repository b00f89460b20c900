//! HTTP presentation API
//!
//! This module exposes the controller's read contract and the three user
//! commands over a REST surface:
//! - POST /session/connect - Start a session against the room
//! - POST /session/disconnect - Leave the room
//! - POST /session/transcript/clear - Empty the transcript
//! - GET /session/state - Current session status
//! - GET /session/transcript - Transcript snapshot
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
