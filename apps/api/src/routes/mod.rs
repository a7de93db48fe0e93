pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::insights::handlers;
use crate::state::AppState;

/// Uploads carry base64 PDFs in the JSON body.
pub const MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Uploads API
        .route("/api/uploads/resume", post(handlers::handle_upload_resume))
        // Matches API
        .route("/api/matches/score", post(handlers::handle_score))
        .route("/api/matches/breakdown", post(handlers::handle_breakdown))
        .route("/api/matches/rewrite", post(handlers::handle_rewrite))
        .route("/api/matches/rankings", post(handlers::handle_rankings))
        .route("/api/matches/recent", get(handlers::handle_recent))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
