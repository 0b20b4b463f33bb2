//! Error types and handling for the catalog loader and CLI
//!
//! The search core itself never fails; everything here belongs to the
//! I/O layer around it.

use thiserror::Error;

/// Longest query accepted from the command line
pub const MAX_QUERY_CHARS: usize = 500;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Dataset fetch failed: {0}")]
    DatasetFetchFailed(String),
    #[error("Dataset parse failed: {0}")]
    DatasetParseFailed(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::DatasetFetchFailed(_) => "dataset_fetch_failed",
            AppError::DatasetParseFailed(_) => "dataset_parse_failed",
            AppError::Timeout(_) => "timeout",
            AppError::Io(_) => "io_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 1,
            AppError::DatasetFetchFailed(_) => 2,
            AppError::DatasetParseFailed(_) => 3,
            AppError::Timeout(_) => 4,
            AppError::Io(_) | AppError::Internal(_) => 5,
        }
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_decode() {
            AppError::DatasetParseFailed(err.to_string())
        } else {
            AppError::DatasetFetchFailed(err.to_string())
        }
    }
}

/// Convert serde_json::Error to AppError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DatasetParseFailed(err.to_string())
    }
}

pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::InvalidInput(format!(
            "Query too long, maximum {} characters",
            MAX_QUERY_CHARS
        )));
    }

    Ok(())
}
