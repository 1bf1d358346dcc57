//! Configuration for the backend API connection.

use fresco_error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection configuration for the story backend.
///
/// # Examples
///
/// ```
/// use fresco_client::ApiConfig;
///
/// let config = ApiConfig::new("http://localhost:8002/api");
/// assert_eq!(config.base_url, "http://localhost:8002/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, including any path prefix
    /// (e.g., "http://localhost:8002/api")
    pub base_url: String,
    /// Optional bearer token
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Create a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `FRESCO_API_BASE_URL` (default: "http://localhost:8002/api")
    /// - `FRESCO_API_KEY` (optional)
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("FRESCO_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8002/api".to_string());
        let api_key = std::env::var("FRESCO_API_KEY").ok();
        Self { base_url, api_key }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config: ApiConfig =
            toml::from_str("base_url = \"http://localhost:8002/api\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:8002/api");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_with_api_key() {
        let config = ApiConfig::new("http://localhost:8002/api").with_api_key("secret");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }
}
