use crate::skill_normalizer::{SynonymTable, normalize_skills};

/// Weight of the breadth bonus added on top of requirement coverage.
const BREADTH_BONUS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub score: f64,
    /// Normalized required skills the candidate covers (directly or via synonym).
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Required-skill coverage with synonym awareness.
///
/// - no requirements → `neutral`
/// - requirements but no candidate skills → 0.0
/// - otherwise matched / required, plus `min(candidates / required, 1) * 0.1`
///   when at least one skill matched, capped at 1.0
pub fn check_required_skills(
    candidate_skills: &[String],
    required_skills: &[String],
    synonyms: &SynonymTable,
    neutral: f64,
) -> SkillMatchResult {
    if required_skills.is_empty() {
        return SkillMatchResult {
            score: neutral,
            matched_skills: vec![],
            missing_skills: vec![],
        };
    }

    let required = normalize_skills(required_skills);
    if candidate_skills.is_empty() {
        return SkillMatchResult {
            score: 0.0,
            matched_skills: vec![],
            missing_skills: required,
        };
    }

    let candidates = normalize_skills(candidate_skills);
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| synonyms.matches_any(skill, &candidates));

    let mut score = matched_skills.len() as f64 / required.len() as f64;
    if score > 0.0 {
        let breadth = (candidates.len() as f64 / required.len() as f64).min(1.0);
        score = (score + breadth * BREADTH_BONUS).min(1.0);
    }

    SkillMatchResult {
        score,
        matched_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::weights::NEUTRAL_SCORE;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn check(candidate: &[&str], required: &[&str]) -> SkillMatchResult {
        check_required_skills(
            &skills(candidate),
            &skills(required),
            &SynonymTable::default(),
            NEUTRAL_SCORE,
        )
    }

    #[test]
    fn empty_requirements_are_neutral() {
        assert_eq!(check(&["python"], &[]).score, 0.5);
        assert_eq!(check(&[], &[]).score, 0.5);
    }

    #[test]
    fn empty_candidate_skills_score_zero() {
        let result = check(&[], &["Rust"]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_skills, vec!["rust"]);
    }

    #[test]
    fn full_coverage_with_bonus_is_capped() {
        let result = check(&["Python", "Docker"], &["python", "docker"]);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn partial_coverage_gets_breadth_bonus() {
        // 3 of 4 matched, 3 candidates for 4 requirements: 0.75 + 0.75 * 0.1
        let result = check(
            &["Python", "Machine Learning", "Docker"],
            &["Python", "Machine Learning", "Docker", "AWS"],
        );
        assert!((result.score - 0.825).abs() < 1e-12);
        assert_eq!(result.missing_skills, vec!["aws"]);
    }

    #[test]
    fn no_overlap_gets_no_bonus() {
        let result = check(&["Ruby", "PHP"], &["JavaScript", "React"]);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing_skills.len(), 2);
    }

    #[test]
    fn synonyms_match_in_both_directions() {
        assert_eq!(check(&["machine learning"], &["ML"]).score, 1.0);
        assert_eq!(check(&["ml"], &["Machine Learning"]).score, 1.0);
        assert_eq!(check(&["JS"], &["node"]).score, 1.0);
    }

    #[test]
    fn whitespace_variants_are_normalized() {
        let result = check(&["  machine   LEARNING "], &["Machine Learning"]);
        assert_eq!(result.matched_skills, vec!["machine learning"]);
    }

    #[test]
    fn neutral_value_comes_from_caller() {
        let result = check_required_skills(&skills(&["go"]), &[], &SynonymTable::empty(), 0.25);
        assert_eq!(result.score, 0.25);
    }
}
