pub mod feature_hash;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;

use std::collections::BTreeMap;

use tracing::warn;

use crate::{Posting, Profile};
pub use feature_hash::{encode_skills, feature_similarity};
pub use similarity::{cosine_similarity, keyword_overlap};
pub use tfidf::{TfidfConfig, TfidfError, TfidfVectorizer};

/// Aggregate free text of a profile: skills, bio, then preferences.
pub fn profile_text(profile: &Profile) -> String {
    let mut parts: Vec<String> = profile.skills.clone();
    if let Some(bio) = &profile.bio {
        parts.push(bio.clone());
    }
    push_preferences(&mut parts, &profile.preferences);
    parts.join(" ")
}

/// Aggregate free text of a posting: description then title.
///
/// Required skills are scored by the skill matcher and stay out of the text.
pub fn posting_text(posting: &Posting) -> String {
    [posting.description.as_str(), posting.title.as_str()].join(" ")
}

/// `"<key> <value>"` for scalar preference values; nulls and nested values are skipped.
fn push_preferences(parts: &mut Vec<String>, preferences: &BTreeMap<String, serde_json::Value>) {
    for (key, value) in preferences {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => continue,
        };
        parts.push(format!("{key} {rendered}"));
    }
}

/// Statistical text similarity between a profile and a posting.
///
/// TF-IDF cosine over the two-document corpus is tried first; any failure is
/// logged and replaced by [`keyword_overlap`], so callers only ever see a score.
#[derive(Debug, Clone)]
pub struct TextSimilarityScorer {
    vectorizer: TfidfVectorizer,
}

impl TextSimilarityScorer {
    pub fn new(config: TfidfConfig) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(config),
        }
    }

    pub fn score(&self, profile: &Profile, posting: &Posting) -> f64 {
        self.score_texts(&profile_text(profile), &posting_text(posting))
    }

    pub fn score_texts(&self, profile_text: &str, posting_text: &str) -> f64 {
        if profile_text.trim().is_empty() || posting_text.trim().is_empty() {
            return 0.0;
        }

        match self.tfidf_similarity(profile_text, posting_text) {
            Ok(score) => score,
            Err(err) => {
                warn!(error = %err, "tfidf similarity failed; using keyword overlap fallback");
                keyword_overlap(profile_text, posting_text)
            }
        }
    }

    pub fn tfidf_similarity(&self, a: &str, b: &str) -> Result<f64, TfidfError> {
        let rows = self.vectorizer.fit_transform(&[a, b])?;
        Ok(cosine_similarity(&rows[0], &rows[1]))
    }
}

impl Default for TextSimilarityScorer {
    fn default() -> Self {
        Self::new(TfidfConfig::default())
    }
}
