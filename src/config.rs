//! Client Configuration
//!
//! Backend location, request timeout and durable storage keys.

use std::time::Duration;

/// Used when `RECIPE_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Request timeout applied by native transports
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Durable storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Durable storage key holding the persisted auth session
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Durable storage key holding the persisted favorites list
pub const FAVORITES_STORAGE_KEY: &str = "favorites-storage";

/// Route the client is sent to when the backend rejects the session
pub const LOGIN_ROUTE: &str = "/login";

/// Quiet period before a typed recipe search is sent
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Recipes per listing page
pub const RECIPE_PAGE_SIZE: u32 = 12;

/// Backend connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL baked in at compile time
    pub fn from_env() -> Self {
        Self::new(option_env!("RECIPE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("https://api.example.com/api/");
        assert_eq!(config.base_url, "https://api.example.com/api");
        assert_eq!(config.url("/recipes"), "https://api.example.com/api/recipes");
        assert_eq!(config.url("health"), "https://api.example.com/api/health");
    }

    #[test]
    fn test_default_timeout() {
        let config = ApiConfig::new(DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        let config = config.with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
