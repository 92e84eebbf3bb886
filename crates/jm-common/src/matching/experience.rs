/// Years-of-experience fit.
///
/// No requirement or a candidate at/above it scores 1.0; below it the score is the
/// fraction of the requirement covered.
pub fn score_experience(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 || candidate_years >= required_years {
        return 1.0;
    }
    (candidate_years as f64 / required_years as f64).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_requirement_is_full_match() {
        assert_eq!(score_experience(5, 0), 1.0);
        assert_eq!(score_experience(0, 0), 1.0);
    }

    #[test]
    fn meeting_or_exceeding_is_full_match() {
        assert_eq!(score_experience(5, 5), 1.0);
        assert_eq!(score_experience(12, 3), 1.0);
    }

    #[test]
    fn shortfall_is_proportional() {
        assert_eq!(score_experience(2, 4), 0.5);
        assert_eq!(score_experience(0, 3), 0.0);
        assert!((score_experience(4, 5) - 0.8).abs() < 1e-12);
    }
}
