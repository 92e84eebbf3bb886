use serde::Deserialize;

use crate::{MatchError, Posting, Profile};

/// Ranking request: one profile against a list of postings.
///
/// The profile fields sit at the top level next to `postings`, mirroring the
/// match endpoint body.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub postings: Vec<Posting>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl MatchRequest {
    /// Decode a request, rejecting wrongly typed fields instead of coercing them.
    pub fn from_json(body: &str) -> Result<Self, MatchError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_profile_fields_and_postings() {
        let request = MatchRequest::from_json(
            r#"{
                "skills": ["Python", "Docker"],
                "experience_years": 4,
                "desired_location": "San Francisco",
                "preferences": {"remote": true},
                "postings": [{"title": "Engineer", "required_skills": ["Python"]}],
                "limit": 5
            }"#,
        )
        .unwrap();

        assert_eq!(request.profile.skills, vec!["Python", "Docker"]);
        assert_eq!(request.profile.experience_years, 4);
        assert_eq!(request.postings.len(), 1);
        assert_eq!(request.postings[0].experience_years, 0);
        assert_eq!(request.limit, Some(5));
    }

    #[test]
    fn missing_optional_fields_default() {
        let request = MatchRequest::from_json(r#"{"skills": []}"#).unwrap();
        assert_eq!(request.profile.experience_years, 0);
        assert!(request.profile.desired_location.is_none());
        assert!(request.postings.is_empty());
    }

    #[test]
    fn null_optional_fields_default() {
        let request = MatchRequest::from_json(
            r#"{
                "skills": null,
                "experience_years": null,
                "preferences": null,
                "postings": [{
                    "title": "Engineer",
                    "description": null,
                    "required_skills": null,
                    "location": null,
                    "experience_years": null
                }]
            }"#,
        )
        .unwrap();

        assert!(request.profile.skills.is_empty());
        assert_eq!(request.profile.experience_years, 0);
        assert!(request.profile.preferences.is_empty());
        let posting = &request.postings[0];
        assert_eq!(posting.experience_years, 0);
        assert!(posting.required_skills.is_empty());
        assert_eq!(posting.location, "");
    }

    #[test]
    fn fractional_salaries_decode() {
        let request = MatchRequest::from_json(
            r#"{"postings": [{"title": "x", "salary_min": 95000.0, "salary_max": 120000}]}"#,
        )
        .unwrap();
        assert_eq!(request.postings[0].salary_min, Some(95000.0));
        assert_eq!(request.postings[0].salary_max, Some(120000.0));
    }

    #[test]
    fn unknown_posting_fields_are_kept() {
        let request = MatchRequest::from_json(
            r#"{"postings": [{"title": "x", "job_type": "full-time", "created_at": "2024-01-02T00:00:00"}]}"#,
        )
        .unwrap();
        let extra = &request.postings[0].extra;
        assert_eq!(extra["job_type"], "full-time");
        assert_eq!(extra["created_at"], "2024-01-02T00:00:00");
        assert!(!extra.contains_key("title"));
    }

    #[test]
    fn non_string_skill_is_rejected() {
        let err = MatchRequest::from_json(r#"{"skills": ["Python", 42]}"#).unwrap_err();
        assert!(matches!(err, MatchError::InvalidRequest(_)));
    }

    #[test]
    fn negative_experience_is_rejected() {
        let err = MatchRequest::from_json(
            r#"{"skills": [], "postings": [{"title": "x", "experience_years": -1}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid match request"));
    }
}
