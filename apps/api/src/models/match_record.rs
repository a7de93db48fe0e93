use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{AtsBreakdown, ResumeScore, RewritePlan};

/// One full résumé insight as returned by the upload endpoint and kept in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: Uuid,
    pub candidate_name: String,
    pub target_role: String,
    pub resume_text: String,
    /// Where the résumé was fetched from, when it came from a URL.
    pub source_url: Option<String>,
    pub score: ResumeScore,
    pub ats: AtsBreakdown,
    pub rewrite: RewritePlan,
    pub created_at: DateTime<Utc>,
}
