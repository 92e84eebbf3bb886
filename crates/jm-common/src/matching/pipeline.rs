use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    config::MatchingConfig,
    experience::score_experience,
    explanation::explain,
    location::score_location,
    skills::check_required_skills,
};
use crate::{MatchError, Posting, Profile, text::TextSimilarityScorer};

/// Scored posting. Every score lies in [0, 1] and is rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "job")]
    pub posting: Posting,
    pub overall_score: f64,
    pub skill_match: f64,
    pub text_similarity: f64,
    pub experience_match: f64,
    pub location_match: f64,
    #[serde(rename = "match_explanation")]
    pub explanation: String,
}

/// Full-precision sub-scores for one (profile, posting) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skill: f64,
    pub text: f64,
    pub experience: f64,
    pub location: f64,
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Stateless ranking engine over an immutable [`MatchingConfig`].
///
/// Safe to share across threads; no call mutates the engine.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    config: MatchingConfig,
    text_scorer: TextSimilarityScorer,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let text_scorer = TextSimilarityScorer::new(config.text.clone());
        Ok(Self {
            config,
            text_scorer,
        })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// The four independent sub-scores; none reads another's output.
    pub fn sub_scores(&self, profile: &Profile, posting: &Posting) -> SubScores {
        let neutral = self.config.neutral_score;
        let skill = check_required_skills(
            &profile.skills,
            &posting.required_skills,
            &self.config.synonyms,
            neutral,
        );
        trace!(
            matched = ?skill.matched_skills,
            missing = ?skill.missing_skills,
            via_groups = ?skill
                .matched_skills
                .iter()
                .flat_map(|s| self.config.synonyms.canonical_names(s))
                .collect::<Vec<_>>(),
            "skill coverage"
        );

        SubScores {
            skill: skill.score,
            text: self.text_scorer.score(profile, posting),
            experience: score_experience(profile.experience_years, posting.experience_years),
            location: score_location(
                profile.desired_location.as_deref(),
                &posting.location,
                neutral,
            ),
        }
    }

    /// Weighted overall score at full precision.
    pub fn overall(&self, scores: &SubScores) -> f64 {
        self.config
            .weights
            .combine(scores.skill, scores.text, scores.experience, scores.location)
            .clamp(0.0, 1.0)
    }

    /// Score one posting. Returns the full-precision overall alongside the rounded result.
    pub fn score_posting(&self, profile: &Profile, posting: &Posting) -> (f64, MatchResult) {
        let scores = self.sub_scores(profile, posting);
        let overall = self.overall(&scores);

        let result = MatchResult {
            posting: posting.clone(),
            overall_score: round3(overall),
            skill_match: round3(scores.skill),
            text_similarity: round3(scores.text),
            experience_match: round3(scores.experience),
            location_match: round3(scores.location),
            explanation: explain(scores.skill, scores.experience, scores.location),
        };
        (overall, result)
    }

    /// Rank postings for a profile, best first.
    ///
    /// Sorting uses full-precision overall scores and is stable: postings with equal
    /// scores keep their input order. An empty slice yields an empty result.
    pub fn rank(&self, profile: &Profile, postings: &[Posting]) -> Vec<MatchResult> {
        let mut scored: Vec<(f64, MatchResult)> = postings
            .iter()
            .map(|posting| self.score_posting(profile, posting))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        debug!(
            postings = postings.len(),
            top_score = scored.first().map(|(score, _)| *score),
            "ranked postings"
        );

        scored.into_iter().map(|(_, result)| result).collect()
    }

    /// Postings only, in [`rank`](Self::rank) order.
    pub fn rank_postings(&self, profile: &Profile, postings: &[Posting]) -> Vec<Posting> {
        self.rank(profile, postings)
            .into_iter()
            .map(|result| result.posting)
            .collect()
    }
}
