use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::match_score::{score_resume_against_job, ResumeScore, DEFAULT_TARGET_ROLE};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub id: String,
    pub name: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub score: ResumeScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub job_description: String,
    pub rankings: Vec<RankedCandidate>,
    pub generated_at: DateTime<Utc>,
}

/// Scores every candidate with the default target role and orders them by
/// `final_score`, highest first. Equal scores keep their input order.
pub fn rank_candidates(job_description: &str, candidates: &[CandidateInput]) -> RankingResult {
    rank_candidates_at(job_description, candidates, Utc::now())
}

pub fn rank_candidates_at(
    job_description: &str,
    candidates: &[CandidateInput],
    generated_at: DateTime<Utc>,
) -> RankingResult {
    let mut rankings: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| RankedCandidate {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            score: score_resume_against_job(
                &candidate.resume_text,
                job_description,
                DEFAULT_TARGET_ROLE,
            ),
        })
        .collect();

    // sort_by is stable
    rankings.sort_by(|a, b| b.score.final_score.total_cmp(&a.score.final_score));

    RankingResult {
        job_description: job_description.to_string(),
        rankings,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const JD: &str = "Looking for a senior engineer who can design AI systems, work with recruiters, and drive launches.";

    fn candidate(id: &str, name: &str, resume_text: &str) -> CandidateInput {
        CandidateInput {
            id: id.to_string(),
            name: name.to_string(),
            resume_text: resume_text.to_string(),
        }
    }

    #[test]
    fn test_stronger_resume_ranks_first() {
        let candidates = vec![
            candidate(
                "1",
                "Alex",
                "Built internal AI resume screener. Increased recruiter throughput by 35%. Led 4 engineers to ship matching engine",
            ),
            candidate("2", "Sam", "Entry level support specialist"),
        ];
        let result = rank_candidates(JD, &candidates);
        assert_eq!(result.rankings.len(), 2);
        assert_eq!(result.rankings[0].id, "1");
        assert_eq!(result.rankings[0].name, "Alex");
        assert_eq!(result.job_description, JD);
    }

    #[test]
    fn test_weaker_first_in_input_is_reordered() {
        let candidates = vec![
            candidate("weak", "Sam", "Entry level support specialist"),
            candidate("strong", "Alex", "Senior engineer who designed AI systems for recruiters"),
        ];
        let result = rank_candidates(JD, &candidates);
        let ids: Vec<&str> = result.rankings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["strong", "weak"]);
        assert!(result.rankings[0].score.final_score >= result.rankings[1].score.final_score);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let same = "Gardening and landscaping portfolio";
        let candidates = vec![
            candidate("c", "Casey", same),
            candidate("a", "Avery", same),
            candidate("b", "Blake", same),
        ];
        let result = rank_candidates(JD, &candidates);
        let ids: Vec<&str> = result.rankings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_uses_default_target_role() {
        let result = rank_candidates(JD, &[candidate("1", "Alex", "AI engineer")]);
        assert!(result.rankings[0].score.summary.starts_with("candidate: "));
    }

    #[test]
    fn test_empty_candidate_list() {
        let result = rank_candidates(JD, &[]);
        assert!(result.rankings.is_empty());
    }

    #[test]
    fn test_generated_at_is_the_supplied_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let result = rank_candidates_at(JD, &[], at);
        assert_eq!(result.generated_at, at);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["generatedAt"], "2025-03-01T12:00:00Z");
        assert_eq!(json["jobDescription"], JD);
    }
}
