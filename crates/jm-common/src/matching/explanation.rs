/// Fallback text when no phrase qualifies.
pub const BASIC_MATCH: &str = "Basic match";

fn skill_phrase(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent skill match"
    } else if score >= 0.6 {
        "Good skill match"
    } else if score >= 0.4 {
        "Moderate skill match"
    } else {
        "Limited skill match"
    }
}

fn experience_phrase(score: f64) -> Option<&'static str> {
    if score >= 0.8 {
        Some("meets experience requirements")
    } else if score >= 0.5 {
        Some("close to experience requirements")
    } else {
        None
    }
}

fn location_phrase(score: f64) -> Option<&'static str> {
    if score >= 0.8 {
        Some("great location fit")
    } else if score >= 0.5 {
        Some("acceptable location")
    } else {
        None
    }
}

/// Human-readable summary from full-precision sub-scores.
///
/// Text similarity does not contribute a phrase.
pub fn explain(skill: f64, experience: f64, location: f64) -> String {
    let phrases: Vec<&str> = std::iter::once(Some(skill_phrase(skill)))
        .chain([experience_phrase(experience), location_phrase(location)])
        .flatten()
        .collect();

    if phrases.is_empty() {
        BASIC_MATCH.to_string()
    } else {
        phrases.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_thresholds_met() {
        assert_eq!(
            explain(0.9, 1.0, 1.0),
            "Excellent skill match, meets experience requirements, great location fit"
        );
    }

    #[test]
    fn middle_bands() {
        assert_eq!(
            explain(0.6, 0.5, 0.5),
            "Good skill match, close to experience requirements, acceptable location"
        );
    }

    #[test]
    fn low_experience_and_location_are_silent() {
        assert_eq!(explain(0.45, 0.2, 0.3), "Moderate skill match");
        assert_eq!(explain(0.0, 0.0, 0.0), "Limited skill match");
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert!(explain(0.8, 0.8, 0.8).starts_with("Excellent"));
        assert!(explain(0.4, 0.0, 0.0).starts_with("Moderate"));
    }
}
