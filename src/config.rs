//! Configuration types for the user directory
//!
//! Every option has a default, so a YAML file only needs to name the values
//! it overrides:
//!
//! ```yaml
//! api:
//!   base_url: https://reqres.in/api
//!   timeout_ms: 5000
//! ui:
//!   infinite_scroll_delay_ms: 250
//! ```

use crate::error::{Error, FetchErrorKind, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete configuration, loadable from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Remote API settings
    pub api: ApiConfig,
    /// Timing and layout settings for the list
    pub ui: UiConfig,
    /// User-facing error messages
    pub messages: ErrorMessages,
}

impl DirectoryConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Serialize the config back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)?;

        if self.api.timeout_ms == 0 {
            return Err(Error::invalid_value("api.timeout_ms", "must be > 0"));
        }
        if self.api.api_key_header.trim().is_empty() {
            return Err(Error::invalid_value(
                "api.api_key_header",
                "must not be empty",
            ));
        }
        if !(0.0..=1.0).contains(&self.ui.intersection_threshold) {
            return Err(Error::invalid_value(
                "ui.intersection_threshold",
                "must be between 0 and 1",
            ));
        }
        if !self.ui.intersection_margin.is_finite() || self.ui.intersection_margin < 0.0 {
            return Err(Error::invalid_value(
                "ui.intersection_margin",
                "must be a non-negative number of pixels",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; pages are requested from `{base_url}/users?page={n}`
    pub base_url: String,
    /// Request deadline in milliseconds
    pub timeout_ms: u64,
    /// Name of the API key header
    pub api_key_header: String,
    /// API key value; the header is omitted when unset
    pub api_key: Option<String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://reqres.in/api".to_string(),
            timeout_ms: 10_000,
            api_key_header: "x-api-key".to_string(),
            api_key: Some("reqres-free-v1".to_string()),
            user_agent: format!("user-directory/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Request deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// ============================================================================
// UI Config
// ============================================================================

/// Timing and layout settings for the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the splash screen plays before the list mounts
    pub loading_screen_duration_ms: u64,
    /// Pause after the first page arrives before infinite scroll is enabled
    pub infinite_scroll_delay_ms: u64,
    /// Pixels the viewport is grown by when testing sentinel visibility
    pub intersection_margin: f64,
    /// Fraction of the sentinel that must be inside the grown viewport
    pub intersection_threshold: f64,
    /// Placeholder cards shown while the first page loads
    pub skeleton_count: usize,
    /// Placeholder cards shown while a further page loads
    pub more_skeleton_count: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_screen_duration_ms: 3000,
            infinite_scroll_delay_ms: 500,
            intersection_margin: 50.0,
            intersection_threshold: 0.0,
            skeleton_count: 6,
            more_skeleton_count: 3,
        }
    }
}

impl UiConfig {
    /// Splash screen duration
    pub fn loading_screen_duration(&self) -> Duration {
        Duration::from_millis(self.loading_screen_duration_ms)
    }

    /// Settle delay after the first page
    pub fn infinite_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.infinite_scroll_delay_ms)
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Messages shown to the user for each fetch error category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    /// Shown when the server cannot be reached
    pub connectivity: String,
    /// Shown when a request exceeds its deadline
    pub timeout: String,
    /// Shown on non-2xx responses; `{status}` and `{reason}` are substituted
    pub server: String,
    /// Shown for anything else
    pub unknown: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            connectivity: "Network error: Please check your internet connection".to_string(),
            timeout: "Request timeout: The server is taking too long to respond".to_string(),
            server: "API Error: {status} - {reason}".to_string(),
            unknown: "Failed to fetch users".to_string(),
        }
    }
}

impl ErrorMessages {
    /// Turn an error into the message the user sees
    pub fn describe(&self, error: &Error) -> String {
        match (error.fetch_kind(), error) {
            (FetchErrorKind::Connectivity, _) => self.connectivity.clone(),
            (FetchErrorKind::Timeout, _) => self.timeout.clone(),
            (FetchErrorKind::Server, Error::Server { status, reason }) => self
                .server
                .replace("{status}", &status.to_string())
                .replace("{reason}", reason),
            _ => self.unknown.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = DirectoryConfig::default();
        assert_eq!(config.api.base_url, "https://reqres.in/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.api.api_key.as_deref(), Some("reqres-free-v1"));
        assert_eq!(config.ui.loading_screen_duration(), Duration::from_secs(3));
        assert_eq!(config.ui.infinite_scroll_delay(), Duration::from_millis(500));
        assert_eq!(config.ui.intersection_margin, 50.0);
        assert_eq!(config.ui.intersection_threshold, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DirectoryConfig::from_yaml_str(
            r"
api:
  base_url: http://localhost:8080/api
ui:
  infinite_scroll_delay_ms: 0
",
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.ui.infinite_scroll_delay_ms, 0);
        assert_eq!(config.ui.loading_screen_duration_ms, 3000);
        assert_eq!(config.messages, ErrorMessages::default());
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let yaml = DirectoryConfig::default().to_yaml().unwrap();
        let parsed = DirectoryConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, DirectoryConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DirectoryConfig::default();
        config.api.timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "api.timeout_ms"
        ));

        let mut config = DirectoryConfig::default();
        config.ui.intersection_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = DirectoryConfig::default();
        config.ui.intersection_margin = -1.0;
        assert!(config.validate().is_err());

        let mut config = DirectoryConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  timeout_ms: 2500").unwrap();

        let config = DirectoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api.timeout_ms, 2500);
    }

    #[test]
    fn test_from_missing_file() {
        let result = DirectoryConfig::from_file("/nonexistent/user-directory.yaml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_describe_errors() {
        let messages = ErrorMessages::default();
        assert_eq!(
            messages.describe(&Error::Connectivity),
            "Network error: Please check your internet connection"
        );
        assert_eq!(
            messages.describe(&Error::Timeout { timeout_ms: 10 }),
            "Request timeout: The server is taking too long to respond"
        );
        assert_eq!(
            messages.describe(&Error::server(500, "Internal Server Error")),
            "API Error: 500 - Internal Server Error"
        );
        assert_eq!(
            messages.describe(&Error::unknown("expected value at line 1")),
            "Failed to fetch users"
        );
    }

    #[test]
    fn test_describe_with_custom_messages() {
        let messages = ErrorMessages {
            server: "Server said {reason} ({status})".to_string(),
            ..ErrorMessages::default()
        };
        assert_eq!(
            messages.describe(&Error::server(404, "Not Found")),
            "Server said Not Found (404)"
        );
    }
}
