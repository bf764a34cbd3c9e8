use std::time::Duration;

use thiserror::Error;

use crate::graph::GraphId;

pub type Result<T> = std::result::Result<T, MatchingError>;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Invalid graph input: {0}")]
    InvalidGraphInput(String),

    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error("Clock went backwards by {regression:?} while timing trial {trial}")]
    TimingFault { trial: usize, regression: Duration },

    #[error("Invalid matching: {0}")]
    InvalidMatching(String),

    #[error("Unknown node id: {0}")]
    UnknownNode(GraphId),

    #[error("Unknown algorithm '{0}' (expected degree or weight)")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
