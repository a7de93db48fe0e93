//! ATS breakdown: three fixed sections scored 0 – 100, in order
//! Keyword Coverage, Action Verbs, Formatting & Clarity.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::match_score::round2;
use crate::analysis::tokenizer::{tokenize, unique_in_order};

const MAX_KEYWORDS: usize = 30;
const KEYWORD_THRESHOLD: f64 = 0.6;

const ACTION_VERBS: &[&str] = &["built", "scaled", "improved", "designed", "shipped", "launched"];
const ACTION_VERB_THRESHOLD: f64 = 0.5;

/// Fixed score; length is only used to pick the insight.
const FORMATTING_SCORE: f64 = 70.0;
/// Measured in UTF-16 code units, so astral characters such as emoji count twice.
const FORMATTING_MIN_UNITS: usize = 500;

pub const KEYWORD_SECTION: &str = "Keyword Coverage";
pub const ACTION_VERB_SECTION: &str = "Action Verbs";
pub const FORMATTING_SECTION: &str = "Formatting & Clarity";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsSection {
    pub name: String,
    pub score: f64,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsBreakdown {
    pub total: f64,
    pub sections: Vec<AtsSection>,
}

pub fn build_ats_breakdown(resume_text: &str, job_description: &str) -> AtsBreakdown {
    let resume_tokens = tokenize(resume_text);
    let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();

    let job_tokens = tokenize(job_description);
    let keywords: Vec<&str> = unique_in_order(&job_tokens)
        .into_iter()
        .take(MAX_KEYWORDS)
        .collect();
    let keyword_hits = keywords.iter().filter(|kw| resume_set.contains(**kw)).count();
    let keyword_ratio = ratio(keyword_hits, keywords.len());

    let resume_lower = resume_text.to_lowercase();
    let verb_hits = ACTION_VERBS
        .iter()
        .filter(|verb| resume_lower.contains(*verb))
        .count();
    let verb_ratio = ratio(verb_hits, ACTION_VERBS.len());

    let sections = vec![
        AtsSection {
            name: KEYWORD_SECTION.to_string(),
            score: round2(keyword_ratio * 100.0),
            insights: vec![if keyword_ratio > KEYWORD_THRESHOLD {
                "Great keyword match".to_string()
            } else {
                "Add more role-specific keywords".to_string()
            }],
        },
        AtsSection {
            name: ACTION_VERB_SECTION.to_string(),
            score: round2(verb_ratio * 100.0),
            insights: vec![if verb_ratio > ACTION_VERB_THRESHOLD {
                "Nice impact-oriented language".to_string()
            } else {
                "Try highlighting achievements with strong verbs".to_string()
            }],
        },
        AtsSection {
            name: FORMATTING_SECTION.to_string(),
            score: FORMATTING_SCORE,
            insights: vec![if resume_text.encode_utf16().count() > FORMATTING_MIN_UNITS {
                "Resume length looks solid".to_string()
            } else {
                "Consider adding more context".to_string()
            }],
        },
    ];

    let total = round2(sections.iter().map(|s| s.score).sum::<f64>() / sections.len() as f64);

    AtsBreakdown { total, sections }
}

fn ratio(hits: usize, considered: usize) -> f64 {
    if considered == 0 {
        0.0
    } else {
        hits as f64 / considered as f64
    }
}
