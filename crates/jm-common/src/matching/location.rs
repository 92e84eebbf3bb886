const REMOTE_TOKEN: &str = "remote";

const EXACT_SCORE: f64 = 1.0;
const CONTAINED_SCORE: f64 = 0.8;
const REMOTE_BOTH_SCORE: f64 = 1.0;
const REMOTE_ONE_SIDE_SCORE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMatchKind {
    /// One side missing or blank.
    Unknown,
    Exact,
    Contained,
    BothRemote,
    OneSideRemote,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvaluation {
    pub kind: LocationMatchKind,
    pub score: f64,
}

fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

/// The single location rule used by ranking.
///
/// Checks run in a fixed order: missing side, exact, containment either way, then
/// the "remote" token. A remote posting that also contains the desired string
/// (`"Remote"` vs `"Remote, but NYC preferred"`) resolves as containment.
pub fn evaluate_location(
    desired_location: Option<&str>,
    posting_location: &str,
    neutral: f64,
) -> LocationEvaluation {
    let desired = desired_location.map(normalize_location).unwrap_or_default();
    let posting = normalize_location(posting_location);

    let (kind, score) = if desired.is_empty() || posting.is_empty() {
        (LocationMatchKind::Unknown, neutral)
    } else if desired == posting {
        (LocationMatchKind::Exact, EXACT_SCORE)
    } else if posting.contains(&desired) || desired.contains(&posting) {
        (LocationMatchKind::Contained, CONTAINED_SCORE)
    } else {
        match (desired.contains(REMOTE_TOKEN), posting.contains(REMOTE_TOKEN)) {
            (true, true) => (LocationMatchKind::BothRemote, REMOTE_BOTH_SCORE),
            (true, false) | (false, true) => {
                (LocationMatchKind::OneSideRemote, REMOTE_ONE_SIDE_SCORE)
            }
            (false, false) => (LocationMatchKind::Mismatch, 0.0),
        }
    };

    LocationEvaluation { kind, score }
}

pub fn score_location(desired_location: Option<&str>, posting_location: &str, neutral: f64) -> f64 {
    evaluate_location(desired_location, posting_location, neutral).score
}
