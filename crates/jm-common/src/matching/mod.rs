pub mod config;
pub mod experience;
pub mod explanation;
pub mod location;
pub mod pipeline;
pub mod skills;
pub mod weights;

pub use config::MatchingConfig;
pub use pipeline::{MatchResult, MatchingEngine, SubScores};
pub use weights::{DEFAULT_WEIGHTS, NEUTRAL_SCORE, Weights};
