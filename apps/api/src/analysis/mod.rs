// Résumé analysis engine: tokenization, term-frequency similarity, heuristic scoring,
// ATS breakdown, rewrite suggestions and candidate ranking.
// Pure and synchronous. No I/O, no shared state; safe to call from any handler or thread.

pub mod ats;
pub mod match_score;
pub mod ranking;
pub mod rewrite;
pub mod seniority;
pub mod similarity;
pub mod tokenizer;

pub use ats::AtsBreakdown;
pub use match_score::{ResumeScore, DEFAULT_TARGET_ROLE};
pub use ranking::{CandidateInput, RankingResult};
pub use rewrite::RewritePlan;

/// Scores a résumé against a job description. `target_role` defaults to "candidate".
pub fn score(resume_text: &str, job_description: &str, target_role: Option<&str>) -> ResumeScore {
    match_score::score_resume_against_job(
        resume_text,
        job_description,
        target_role.unwrap_or(DEFAULT_TARGET_ROLE),
    )
}

/// Section-by-section ATS breakdown.
pub fn breakdown(resume_text: &str, job_description: &str) -> AtsBreakdown {
    ats::build_ats_breakdown(resume_text, job_description)
}

/// Rewrite suggestions. `target_role` defaults to "candidate".
pub fn rewrite(resume_text: &str, job_description: &str, target_role: Option<&str>) -> RewritePlan {
    rewrite::rewrite_resume(
        resume_text,
        job_description,
        target_role.unwrap_or(DEFAULT_TARGET_ROLE),
    )
}

/// Ranks candidates against one job description, best first.
pub fn rank(job_description: &str, candidates: &[CandidateInput]) -> RankingResult {
    ranking::rank_candidates(job_description, candidates)
}
