//! Rewrite suggestions: fixed templates filled from the job description's first
//! requirements and the résumé's first substantial lines.

use serde::{Deserialize, Serialize};

// Length minimums are in UTF-16 code units.
const MAX_REQUIREMENTS: usize = 3;
const MIN_REQUIREMENT_UNITS: usize = 5;
const MAX_SHARPEN_LINES: usize = 2;
const MIN_SHARPEN_UNITS: usize = 25;
const MAX_BULLETS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewritePlan {
    pub pitch: String,
    pub summary: String,
    pub bullet_points: Vec<String>,
}

pub fn rewrite_resume(resume_text: &str, job_description: &str, target_role: &str) -> RewritePlan {
    let requirements = extract_top_requirements(job_description);

    let pitch = format!(
        "Updated branding for {target_role}: Blend your strongest metrics with the top priorities from the job description."
    );
    let summary = format!(
        "Focus on achievements that map to: {}.",
        requirements.join(", ")
    );
    let bullet_points = build_bullet_points(resume_text, &requirements);

    RewritePlan {
        pitch,
        summary,
        bullet_points,
    }
}

/// First three comma/newline-separated pieces longer than five UTF-16 units, in
/// the order they appear. Not ranked by importance.
pub fn extract_top_requirements(job_description: &str) -> Vec<&str> {
    job_description
        .split([',', '\n'])
        .map(str::trim)
        .filter(|piece| piece.encode_utf16().count() > MIN_REQUIREMENT_UNITS)
        .take(MAX_REQUIREMENTS)
        .collect()
}

fn build_bullet_points(resume_text: &str, requirements: &[&str]) -> Vec<String> {
    let sharpen = resume_text
        .split('\n')
        .flat_map(|line| line.split(". "))
        .filter(|line| line.encode_utf16().count() > MIN_SHARPEN_UNITS)
        .take(MAX_SHARPEN_LINES)
        .map(|line| format!("Sharpen: {line}"));

    requirements
        .iter()
        .map(|req| format!("Quantify how you addressed \"{req}\" with metrics (e.g., +25% growth)."))
        .chain(sharpen)
        .take(MAX_BULLETS)
        .collect()
}
