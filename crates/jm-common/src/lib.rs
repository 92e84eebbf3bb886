pub mod api;
pub mod error;
pub mod logging;
pub mod matching;
pub mod skill_normalizer;
pub mod text;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub use error::MatchError;
pub use matching::{MatchResult, MatchingConfig, MatchingEngine};

// Commonly used data models for matching functions.

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Candidate side of a match. Read-only input to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_years: u32,
    #[serde(default)]
    pub desired_location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Free-form preferences. Only string, number and boolean values contribute
    /// to text similarity; nested values are ignored.
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

/// Job side of a match. Read-only input to the engine.
///
/// Keys the engine does not read (`job_type`, `created_at`, ...) are kept in
/// `extra` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
