//! HTTP client utilities
//!
//! Provides a reqwest::Client for the one-shot dataset download. Proxy
//! environment variables are honored by reqwest itself.

use reqwest::Client;
use std::time::Duration;

use crate::error::AppError;

/// Build a reqwest Client with the given timeout
pub fn client_with_timeout(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("catalog-search/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::DatasetFetchFailed(format!("Failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(client_with_timeout(Duration::from_secs(5)).is_ok());
    }
}
