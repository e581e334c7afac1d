//! Error type for logger setup.

use thiserror::Error;

/// Logger setup failures.
#[derive(Debug, Error)]
pub enum LogError {
    /// The level / directive string could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    Init(String),
}

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;
