use std::sync::Arc;

use crate::history::HistoryStore;
use crate::insights::extraction::ResumeFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Recent upload insights. Default: in-memory ring buffer of 50.
    pub history: Arc<dyn HistoryStore>,
    /// HTTP client for résumés submitted by URL.
    pub fetcher: ResumeFetcher,
}
