use crate::MatchError;
use crate::skill_normalizer::SynonymTable;
use crate::text::TfidfConfig;

use super::weights::{DEFAULT_WEIGHTS, NEUTRAL_SCORE, Weights};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Immutable engine configuration, fixed when the engine is built.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    pub neutral_score: f64,
    pub synonyms: SynonymTable,
    pub text: TfidfConfig,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            neutral_score: NEUTRAL_SCORE,
            synonyms: SynonymTable::default(),
            text: TfidfConfig::default(),
        }
    }
}

impl MatchingConfig {
    /// Defaults overridden by `JM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; values that fail to parse keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_f64 = |key: &str, default: f64| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        let defaults = Self::default();
        Self {
            weights: Weights {
                skill: parse_f64("JM_WEIGHT_SKILL", defaults.weights.skill),
                text: parse_f64("JM_WEIGHT_TEXT", defaults.weights.text),
                experience: parse_f64("JM_WEIGHT_EXPERIENCE", defaults.weights.experience),
                location: parse_f64("JM_WEIGHT_LOCATION", defaults.weights.location),
            },
            neutral_score: parse_f64("JM_NEUTRAL_SCORE", defaults.neutral_score),
            text: TfidfConfig {
                max_features: lookup("JM_TFIDF_MAX_FEATURES")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(defaults.text.max_features),
                ..defaults.text
            },
            synonyms: defaults.synonyms,
        }
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.weights.all_non_negative() {
            return Err(MatchError::InvalidConfig(format!(
                "weights must be finite and non-negative: {:?}",
                self.weights
            )));
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        if !(0.0..=1.0).contains(&self.neutral_score) {
            return Err(MatchError::InvalidConfig(format!(
                "neutral score must lie in [0, 1], got {}",
                self.neutral_score
            )));
        }
        if self.text.max_features == 0 {
            return Err(MatchError::InvalidConfig(
                "tfidf max_features must be at least 1".into(),
            ));
        }
        let (min_n, max_n) = self.text.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(MatchError::InvalidConfig(format!(
                "invalid ngram range ({min_n}, {max_n})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(MatchingConfig::default().validate().is_ok());
    }

    #[test]
    fn lookup_overrides_weights_and_cap() {
        let config = MatchingConfig::from_lookup(lookup_from(&[
            ("JM_WEIGHT_SKILL", "0.5"),
            ("JM_WEIGHT_TEXT", "0.25"),
            ("JM_TFIDF_MAX_FEATURES", "64"),
        ]));
        assert_eq!(config.weights.skill, 0.5);
        assert_eq!(config.weights.text, 0.25);
        assert_eq!(config.weights.experience, 0.15);
        assert_eq!(config.text.max_features, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_values_keep_defaults() {
        let config = MatchingConfig::from_lookup(lookup_from(&[
            ("JM_WEIGHT_SKILL", "lots"),
            ("JM_NEUTRAL_SCORE", ""),
        ]));
        assert_eq!(config.weights.skill, 0.45);
        assert_eq!(config.neutral_score, 0.5);
    }

    #[test]
    fn weights_not_summing_to_one_are_rejected() {
        let config = MatchingConfig {
            weights: Weights {
                skill: 0.9,
                ..DEFAULT_WEIGHTS
            },
            ..MatchingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn out_of_range_neutral_is_rejected() {
        let config = MatchingConfig {
            neutral_score: 1.5,
            ..MatchingConfig::default()
        };
        assert!(matches!(config.validate(), Err(MatchError::InvalidConfig(_))));
    }

    #[test]
    fn zero_vocabulary_cap_is_rejected() {
        let config = MatchingConfig {
            text: TfidfConfig {
                max_features: 0,
                ..TfidfConfig::default()
            },
            ..MatchingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
