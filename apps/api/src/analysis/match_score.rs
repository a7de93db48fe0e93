//! Score aggregation: blends lexical similarity, keyword coverage and seniority
//! signal into a single `ResumeScore`.
//!
//! finalScore = round2((0.5 × similarity + 0.3 × coverage + 0.2 × seniority) × 100)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::seniority::measure_seniority;
use crate::analysis::similarity::cosine_similarity;
use crate::analysis::tokenizer::{build_vector, tokenize};

pub const DEFAULT_TARGET_ROLE: &str = "candidate";

const SIMILARITY_WEIGHT: f64 = 0.5;
const COVERAGE_WEIGHT: f64 = 0.3;
const SENIORITY_WEIGHT: f64 = 0.2;

/// Match score of one résumé against one job description. All fields are
/// percentages (0 – 100) rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScore {
    pub similarity: f64,
    pub keyword_coverage: f64,
    pub seniority_signal: f64,
    pub final_score: f64,
    pub summary: String,
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn score_resume_against_job(
    resume_text: &str,
    job_description: &str,
    target_role: &str,
) -> ResumeScore {
    let resume_tokens = tokenize(resume_text);
    let job_tokens = tokenize(job_description);

    let similarity = cosine_similarity(&build_vector(&resume_tokens), &build_vector(&job_tokens));
    let keyword_coverage = keyword_coverage(&job_tokens, &resume_tokens);
    let seniority_signal = measure_seniority(job_description, resume_text);

    let final_score = round2(
        (similarity * SIMILARITY_WEIGHT
            + keyword_coverage * COVERAGE_WEIGHT
            + seniority_signal * SENIORITY_WEIGHT)
            * 100.0,
    );

    debug!(similarity, keyword_coverage, seniority_signal, final_score, "resume scored against job");

    ResumeScore {
        similarity: round2(similarity * 100.0),
        keyword_coverage: round2(keyword_coverage * 100.0),
        seniority_signal: round2(seniority_signal * 100.0),
        final_score,
        summary: format!(
            "{target_role}: Similarity {:.1}%, keyword coverage {:.1}%, seniority {:.1}%",
            similarity * 100.0,
            keyword_coverage * 100.0,
            seniority_signal * 100.0
        ),
    }
}

/// Share of the job's unique tokens that also occur in the résumé (0.0 – 1.0).
fn keyword_coverage(job_tokens: &[String], resume_tokens: &[String]) -> f64 {
    let job_set: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();
    if job_set.is_empty() {
        return 0.0;
    }
    let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
    let hits = job_set.intersection(&resume_set).count();
    hits as f64 / job_set.len() as f64
}
