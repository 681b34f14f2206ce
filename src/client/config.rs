//! Client configuration options.

use std::path::PathBuf;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.jquants.com/v1";

/// Default location of the persisted token pair.
pub const DEFAULT_TOKEN_PATH: &str = "tokens.json";

/// Query parameter carrying the continuation cursor.
pub const DEFAULT_CURSOR_PARAM: &str = "pagination_key";

/// Configuration for the J-Quants client.
///
/// # Example
///
/// ```
/// use jquants_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_token_path("/var/lib/jquants/tokens.json")
///     .with_refresh_threshold(chrono::Duration::minutes(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root that endpoint paths are appended to
    pub base_url: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// File the token pair is persisted to
    pub token_path: PathBuf,
    /// Tokens expiring within this margin are renewed early
    pub refresh_threshold: chrono::Duration,
    /// Name of the cursor query parameter
    pub cursor_param: String,
    /// Upper bound on pages per fetch; `None` follows the cursor indefinitely
    pub max_pages: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("jquants-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            refresh_threshold: chrono::Duration::zero(),
            cursor_param: DEFAULT_CURSOR_PARAM.to_string(),
            max_pages: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set where the token pair is persisted.
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }

    /// Set the early-renewal margin.
    pub fn with_refresh_threshold(mut self, threshold: chrono::Duration) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    /// Set the cursor query parameter name.
    pub fn with_cursor_param(mut self, name: impl Into<String>) -> Self {
        self.cursor_param = name.into();
        self
    }

    /// Cap the number of pages a single fetch may request.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.jquants.com/v1");
        assert_eq!(config.timeout, None);
        assert_eq!(config.token_path, PathBuf::from("tokens.json"));
        assert_eq!(config.refresh_threshold, chrono::Duration::zero());
        assert_eq!(config.cursor_param, "pagination_key");
        assert_eq!(config.max_pages, None);
        assert!(config.user_agent.starts_with("jquants-rs/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080/v1")
            .with_timeout(Duration::from_secs(5))
            .with_cursor_param("cursor")
            .with_max_pages(10);

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.cursor_param, "cursor");
        assert_eq!(config.max_pages, Some(10));
    }
}
