//! Client configuration.

use std::time::Duration;

/// Default backend base URL, overridable via `VENUEBOOK_API_URL`
pub const DEFAULT_BASE_URL: &str = "https://api.venuebook.app/api/v1";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the [`crate::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config pointing at the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the environment
    ///
    /// Honors `VENUEBOOK_API_URL` and `VENUEBOOK_API_TIMEOUT_SECS`, falling
    /// back to the hosted backend and a 30 second timeout.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("VENUEBOOK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeout = std::env::var("VENUEBOOK_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS), Duration::from_secs);

        Self::new(base_url).with_timeout(timeout)
    }

    /// Override the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("https://example.test/api/v1/");
        assert_eq!(config.base_url, "https://example.test/api/v1");
    }

    #[test]
    fn default_points_at_hosted_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
