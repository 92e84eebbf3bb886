use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// Caller input violates the request contract (wrong scalar types, negative
    /// experience, malformed JSON).
    #[error("invalid match request: {0}")]
    InvalidRequest(String),
    #[error("invalid matching config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for MatchError {
    fn from(value: serde_json::Error) -> Self {
        MatchError::InvalidRequest(value.to_string())
    }
}
