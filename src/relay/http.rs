//! Shared HTTP client construction.
//!
//! Every provider client goes through [`build_client`] so that no outbound
//! call can block the request path indefinitely.

use std::time::Duration;

use super::domain::ProviderError;

/// User agent sent to every provider
pub const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for building a provider HTTP client
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Build a client with gzip, a user agent and a bounded timeout
pub fn build_client(options: &HttpOptions) -> Result<reqwest::Client, ProviderError> {
    build_client_with_headers(options, reqwest::header::HeaderMap::new())
}

/// Same as [`build_client`], with extra default headers
pub fn build_client_with_headers(
    options: &HttpOptions,
    headers: reqwest::header::HeaderMap,
) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HttpOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert!(options.user_agent.starts_with("track-relay/"));
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(&HttpOptions::default()).is_ok());
    }
}
