use thiserror::Error;

use crate::graph::GraphError;

/// Errors that can occur while computing a critical path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriticalPathError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("Unknown source task: {0}")]
    UnknownSource(String),
    #[error("Unknown critical path strategy: {0}")]
    UnknownStrategy(String),
    #[error("Solver gave up after {0} relaxations")]
    RelaxationLimitExceeded(u64),
}
