use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::history::HistoryStore;
use crate::models::MatchRecord;

/// Records kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 50;

/// In-process ring buffer, newest at the front. Contents are lost on restart.
pub struct MemoryHistoryStore {
    records: RwLock<VecDeque<MatchRecord>>,
    capacity: usize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn insert(&self, record: MatchRecord) {
        let mut records = self.records.write().await;
        records.push_front(record);
        records.truncate(self.capacity);
    }

    async fn recent(&self, limit: usize) -> Vec<MatchRecord> {
        let records = self.records.read().await;
        records.iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(name: &str) -> MatchRecord {
        let resume = "Built and shipped a résumé screener";
        let jd = "Senior engineer, AI systems";
        MatchRecord {
            id: Uuid::new_v4(),
            candidate_name: name.to_string(),
            target_role: "Software Engineer".to_string(),
            resume_text: resume.to_string(),
            source_url: None,
            score: analysis::score(resume, jd, None),
            ats: analysis::breakdown(resume, jd),
            rewrite: analysis::rewrite(resume, jd, None),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let store = MemoryHistoryStore::new();
        store.insert(record("first")).await;
        store.insert(record("second")).await;
        store.insert(record("third")).await;

        let names: Vec<String> = store
            .recent(5)
            .await
            .into_iter()
            .map(|r| r.candidate_name)
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_recent_respects_limit() {
        let store = MemoryHistoryStore::new();
        for i in 0..4 {
            store.insert(record(&format!("c{i}"))).await;
        }
        assert_eq!(store.recent(2).await.len(), 2);
        assert!(store.recent(0).await.is_empty());
    }

    #[tokio::test]
    async fn test_evicts_oldest_beyond_capacity() {
        let store = MemoryHistoryStore::new();
        for i in 0..(HISTORY_CAPACITY + 5) {
            store.insert(record(&format!("c{i}"))).await;
        }
        let recent = store.recent(usize::MAX).await;
        assert_eq!(recent.len(), HISTORY_CAPACITY);
        assert_eq!(recent[0].candidate_name, format!("c{}", HISTORY_CAPACITY + 4));
        assert_eq!(recent.last().unwrap().candidate_name, "c5");
    }

    #[tokio::test]
    async fn test_small_capacity() {
        let store = MemoryHistoryStore::with_capacity(1);
        store.insert(record("old")).await;
        store.insert(record("new")).await;
        let recent = store.recent(10).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].candidate_name, "new");
    }
}
