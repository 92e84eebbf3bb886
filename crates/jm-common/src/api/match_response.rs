use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info_span;

use super::MatchRequest;
use crate::{MatchResult, MatchingEngine};

pub const NO_JOBS_MESSAGE: &str = "No jobs available for matching";
pub const MATCHED_MESSAGE: &str = "Matching completed successfully";

/// Ranked response envelope returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub matched_jobs: Vec<MatchResult>,
    pub count: usize,
    pub matched_at: DateTime<Utc>,
}

impl MatchResponse {
    pub fn from_results(results: Vec<MatchResult>, matched_at: DateTime<Utc>) -> Self {
        Self {
            message: Some(MATCHED_MESSAGE.to_string()),
            count: results.len(),
            matched_jobs: results,
            matched_at,
        }
    }

    pub fn empty(matched_at: DateTime<Utc>) -> Self {
        Self {
            message: Some(NO_JOBS_MESSAGE.to_string()),
            matched_jobs: Vec::new(),
            count: 0,
            matched_at,
        }
    }
}

impl MatchingEngine {
    /// Rank a decoded request; `limit` truncates after sorting.
    pub fn handle_request(&self, request: &MatchRequest) -> MatchResponse {
        let _span = info_span!(
            "match_request",
            postings = request.postings.len(),
            candidate_skills = request.profile.skills.len(),
            limit = ?request.limit,
        )
        .entered();

        let matched_at = Utc::now();
        if request.postings.is_empty() {
            return MatchResponse::empty(matched_at);
        }

        let mut results = self.rank(&request.profile, &request.postings);
        if let Some(limit) = request.limit {
            results.truncate(limit);
        }
        MatchResponse::from_results(results, matched_at)
    }
}
