//! Full résumé insight pipeline: resolve text → score + ATS + rewrite → history.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis;
use crate::errors::AppError;
use crate::insights::extraction::{resolve_resume_text, ResumeSource};
use crate::models::MatchRecord;
use crate::state::AppState;

/// Validated upload request.
#[derive(Debug, Clone)]
pub struct InsightRequest {
    pub source: ResumeSource,
    pub job_description: String,
    pub candidate_name: String,
    pub target_role: String,
}

pub async fn build_resume_insight(
    state: &AppState,
    request: InsightRequest,
) -> Result<MatchRecord, AppError> {
    let resume_text = resolve_resume_text(&request.source, &state.fetcher).await?;

    let role = request.target_role.as_str();
    let score = analysis::score(&resume_text, &request.job_description, Some(role));
    let ats = analysis::breakdown(&resume_text, &request.job_description);
    let rewrite = analysis::rewrite(&resume_text, &request.job_description, Some(role));

    let source_url = match &request.source {
        ResumeSource::Url(url) => Some(url.to_string()),
        _ => None,
    };

    let record = MatchRecord {
        id: Uuid::new_v4(),
        candidate_name: request.candidate_name,
        target_role: request.target_role,
        resume_text,
        source_url,
        score,
        ats,
        rewrite,
        created_at: Utc::now(),
    };

    info!(
        id = %record.id,
        final_score = record.score.final_score,
        ats_total = record.ats.total,
        "resume insight built"
    );

    state.history.insert(record.clone()).await;
    Ok(record)
}
