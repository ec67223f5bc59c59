//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::ClientConfig;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the messaging API.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config
/// - Redirects disabled (credentials are only ever sent to the configured host)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &ClientConfig) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        assert!(init_client(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_short_timeout() {
        let config = ClientConfig {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
