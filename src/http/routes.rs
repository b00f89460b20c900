use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session commands
        .route("/session/connect", post(handlers::connect_session))
        .route("/session/disconnect", post(handlers::disconnect_session))
        .route(
            "/session/transcript/clear",
            post(handlers::clear_transcript),
        )
        // Session queries
        .route("/session/state", get(handlers::get_session_state))
        .route("/session/transcript", get(handlers::get_transcript))
        // Request logging plus permissive CORS for the rendering client
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
