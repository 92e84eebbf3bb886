/// Score used when a requirement or preference is absent: no evidence either way.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Ranking weights. Skills dominate, free text second, experience and location
/// act as tie-breakers.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skill: 0.45,
    text: 0.30,
    experience: 0.15,
    location: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skill: f64,
    pub text: f64,
    pub experience: f64,
    pub location: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skill + self.text + self.experience + self.location
    }

    pub fn all_non_negative(&self) -> bool {
        [self.skill, self.text, self.experience, self.location]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }

    pub fn combine(&self, skill: f64, text: f64, experience: f64, location: f64) -> f64 {
        skill * self.skill + text * self.text + experience * self.experience + location * self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!(DEFAULT_WEIGHTS.all_non_negative());
    }

    #[test]
    fn combine_of_perfect_scores_is_weight_sum() {
        let total = DEFAULT_WEIGHTS.combine(1.0, 1.0, 1.0, 1.0);
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_weight_is_flagged() {
        let weights = Weights {
            skill: -0.1,
            ..DEFAULT_WEIGHTS
        };
        assert!(!weights.all_non_negative());
    }
}
