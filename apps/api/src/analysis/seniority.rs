//! Seniority detection: infers the level a job description asks for and measures
//! how strongly a résumé echoes it.
//!
//! Detection is first-match over `SENIORITY_TABLE` in declaration order. A JD that
//! mentions both "senior" and "manager" is `Senior`, and any JD containing
//! "engineer" is `Mid` unless a junior keyword appears first in the table.

use serde::{Deserialize, Serialize};

/// Signal returned when the job description names no recognised level.
pub const NEUTRAL_SIGNAL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
    Manager,
}

/// Priority-ordered level → keyword table. Order is part of the contract.
const SENIORITY_TABLE: &[(SeniorityLevel, &[&str])] = &[
    (SeniorityLevel::Junior, &["junior", "entry", "intern"]),
    (SeniorityLevel::Mid, &["mid", "intermediate", "engineer"]),
    (SeniorityLevel::Senior, &["senior", "lead", "principal", "staff"]),
    (SeniorityLevel::Manager, &["manager", "head", "director"]),
];

impl SeniorityLevel {
    pub fn keywords(self) -> &'static [&'static str] {
        SENIORITY_TABLE
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

/// Returns the first level whose keywords appear (case-insensitive substring) in `text`.
pub fn detect_level(text: &str) -> Option<SeniorityLevel> {
    let lower = text.to_lowercase();
    SENIORITY_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(level, _)| *level)
}

/// Fraction (0.0 – 1.0) of the detected level's keywords present in the résumé.
/// Neutral 0.5 when the job description implies no level.
pub fn measure_seniority(job_description: &str, resume_text: &str) -> f64 {
    let Some(level) = detect_level(job_description) else {
        return NEUTRAL_SIGNAL;
    };

    let keywords = level.keywords();
    let resume_lower = resume_text.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|kw| resume_lower.contains(*kw))
        .count();

    (hits as f64 / keywords.len() as f64).min(1.0)
}
