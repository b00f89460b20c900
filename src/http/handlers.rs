use super::state::AppState;
use crate::controller::Credentials;
use crate::transcript::TranscriptEntry;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub server_url: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    /// One of "idle", "connecting", "connected", "failed"
    pub state: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    pub remote_participants: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/connect
/// Validate credentials and start connecting to the room
pub async fn connect_session(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> impl IntoResponse {
    let credentials = Credentials::new(req.server_url, req.token);

    match state.controller.request_connect(credentials).await {
        Ok(()) => (
            StatusCode::OK,
            Json(CommandResponse {
                status: "connecting".to_string(),
                message: "Connect request accepted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /session/disconnect
/// Leave the room; the transcript is kept
pub async fn disconnect_session(State(state): State<AppState>) -> impl IntoResponse {
    state.controller.request_disconnect().await;

    (
        StatusCode::OK,
        Json(CommandResponse {
            status: "idle".to_string(),
            message: "Disconnected".to_string(),
        }),
    )
}

/// POST /session/transcript/clear
/// Empty the transcript without touching the session
pub async fn clear_transcript(State(state): State<AppState>) -> impl IntoResponse {
    state.controller.clear_transcript().await;

    info!("Transcript cleared via API");

    (
        StatusCode::OK,
        Json(CommandResponse {
            status: "cleared".to_string(),
            message: "Transcript cleared".to_string(),
        }),
    )
}

/// GET /session/state
/// Current session status snapshot
pub async fn get_session_state(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.controller.status().await;

    (
        StatusCode::OK,
        Json(SessionStateResponse {
            state: status.state.label().to_string(),
            reason: status.state.reason().map(str::to_string),
            last_error: status.last_error,
            remote_participants: status.remote_participants,
            audio_warning: state.audio_warning.clone(),
        }),
    )
}

/// GET /session/transcript
/// Transcript snapshot, in display order
pub async fn get_transcript(State(state): State<AppState>) -> impl IntoResponse {
    let transcript: Vec<TranscriptEntry> = state.controller.transcript_snapshot().await;
    (StatusCode::OK, Json(transcript))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
