//! Match history: the bounded record of recently computed insights.
//!
//! The analysis engine never sees this. Handlers write through the
//! `HistoryStore` held in `AppState`, so the backend can be swapped without
//! touching the engine or the routes.

use async_trait::async_trait;

use crate::models::MatchRecord;

pub mod memory;

pub use memory::MemoryHistoryStore;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Records a result as the most recent entry.
    async fn insert(&self, record: MatchRecord);

    /// Up to `limit` records, newest first.
    async fn recent(&self, limit: usize) -> Vec<MatchRecord>;
}
