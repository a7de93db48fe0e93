//! Axum route handlers for the Matches and Uploads APIs.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::{self, AtsBreakdown, CandidateInput, RankingResult, ResumeScore, RewritePlan};
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::history::memory::HISTORY_CAPACITY;
use crate::insights::extraction::{parse_resume_url, ResumeSource};
use crate::insights::service::{build_resume_insight, InsightRequest};
use crate::models::MatchRecord;
use crate::state::AppState;

const MIN_TEXT_CHARS: usize = 50;
const MIN_UPLOAD_JD_CHARS: usize = 10;
const DEFAULT_RECENT_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub resume_text: String,
    pub job_description: String,
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRequest {
    pub job_description: String,
    pub candidates: Vec<CandidateInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub resume_url: Option<String>,
    pub file_base64: Option<String>,
    pub resume_text: Option<String>,
    pub job_description: String,
    #[serde(default = "default_candidate_name")]
    pub candidate_name: String,
    #[serde(default = "default_target_role")]
    pub target_role: String,
}

fn default_candidate_name() -> String {
    "Candidate".to_string()
}

fn default_target_role() -> String {
    "Software Engineer".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn require_min_chars(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

fn validate_match(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    require_min_chars("resumeText", resume_text, MIN_TEXT_CHARS)?;
    require_min_chars("jobDescription", job_description, MIN_TEXT_CHARS)
}

impl UploadRequest {
    /// Picks the résumé source (`fileBase64` > `resumeUrl` > `resumeText`) and checks fields.
    fn into_insight_request(self) -> Result<InsightRequest, AppError> {
        require_min_chars("jobDescription", &self.job_description, MIN_UPLOAD_JD_CHARS)?;

        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        // A malformed URL is rejected even when a file takes precedence.
        let url = non_blank(self.resume_url)
            .map(|raw| parse_resume_url(&raw))
            .transpose()?;
        let source = match (non_blank(self.file_base64), url, non_blank(self.resume_text)) {
            (Some(file), _, _) => ResumeSource::File(file),
            (None, Some(url), _) => ResumeSource::Url(url),
            (None, None, Some(text)) => ResumeSource::Text(text),
            (None, None, None) => {
                return Err(AppError::Validation(
                    "Provide either a resume URL or a PDF upload".to_string(),
                ))
            }
        };

        Ok(InsightRequest {
            source,
            job_description: self.job_description,
            candidate_name: self.candidate_name,
            target_role: self.target_role,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/uploads/resume
///
/// Resolves the résumé text, runs score + ATS + rewrite and records the result.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<UploadRequest>,
) -> Result<Json<MatchRecord>, AppError> {
    let insight = request.into_insight_request()?;
    let record = build_resume_insight(&state, insight).await?;
    Ok(Json(record))
}

/// POST /api/matches/score
pub async fn handle_score(
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<ResumeScore>, AppError> {
    validate_match(&request.resume_text, &request.job_description)?;
    Ok(Json(analysis::score(
        &request.resume_text,
        &request.job_description,
        None,
    )))
}

/// POST /api/matches/breakdown
pub async fn handle_breakdown(
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<AtsBreakdown>, AppError> {
    validate_match(&request.resume_text, &request.job_description)?;
    Ok(Json(analysis::breakdown(
        &request.resume_text,
        &request.job_description,
    )))
}

/// POST /api/matches/rewrite
pub async fn handle_rewrite(
    AppJson(request): AppJson<RewriteRequest>,
) -> Result<Json<RewritePlan>, AppError> {
    validate_match(&request.resume_text, &request.job_description)?;
    Ok(Json(analysis::rewrite(
        &request.resume_text,
        &request.job_description,
        request.target_role.as_deref(),
    )))
}

/// POST /api/matches/rankings
pub async fn handle_rankings(
    AppJson(request): AppJson<RankingRequest>,
) -> Result<Json<RankingResult>, AppError> {
    require_min_chars("jobDescription", &request.job_description, MIN_TEXT_CHARS)?;
    for (i, candidate) in request.candidates.iter().enumerate() {
        require_min_chars(
            &format!("candidates[{i}].resumeText"),
            &candidate.resume_text,
            MIN_TEXT_CHARS,
        )?;
    }

    let ranking = analysis::rank(&request.job_description, &request.candidates);
    tracing::info!(
        candidates = ranking.rankings.len(),
        top_score = ?ranking.rankings.first().map(|r| r.score.final_score),
        "candidates ranked"
    );
    Ok(Json(ranking))
}

/// GET /api/matches/recent?limit=N
///
/// Most recent upload insights, newest first.
pub async fn handle_recent(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RecentQuery>,
) -> Json<Vec<MatchRecord>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(HISTORY_CAPACITY);
    Json(state.history.recent(limit).await)
}
