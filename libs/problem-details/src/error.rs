//! Crate error type

/// Failures of the fallible [`ProblemDetail`](crate::ProblemDetail) helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem details JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("status {0} is not a valid HTTP status code")]
    InvalidStatus(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
