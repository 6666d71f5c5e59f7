//! Error types for the user directory
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Fetch failures are normalized into four categories (see [`FetchErrorKind`]).
//! The controller never shows raw transport errors to the user; it turns them
//! into messages through [`crate::config::ErrorMessages::describe`].

use thiserror::Error;

/// The main error type for the user directory
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("Invalid page number {page}: pages start at 1")]
    InvalidPage { page: u32 },

    #[error("Network error: Please check your internet connection")]
    Connectivity,

    #[error("Request timeout: The server is taking too long to respond")]
    Timeout { timeout_ms: u64 },

    #[error("API Error: {status} - {reason}")]
    Server { status: u16, reason: String },

    #[error("Failed to fetch users: {message}")]
    Unknown { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// User-facing category of a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// No route to the server (DNS failure, refused connection, offline)
    Connectivity,
    /// The request exceeded the client deadline
    Timeout,
    /// The server answered with a non-2xx status
    Server,
    /// Anything else
    Unknown,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a server error from a status code and reason text
    pub fn server(status: u16, reason: impl Into<String>) -> Self {
        Self::Server {
            status,
            reason: reason.into(),
        }
    }

    /// Create an unknown fetch error
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Category this error falls into when it comes out of a fetch
    pub fn fetch_kind(&self) -> FetchErrorKind {
        match self {
            Error::Connectivity => FetchErrorKind::Connectivity,
            Error::Timeout { .. } => FetchErrorKind::Timeout,
            Error::Server { .. } => FetchErrorKind::Server,
            _ => FetchErrorKind::Unknown,
        }
    }
}

/// Result type alias for the user directory
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::server(404, "Not Found");
        assert_eq!(err.to_string(), "API Error: 404 - Not Found");

        let err = Error::Timeout { timeout_ms: 10_000 };
        assert_eq!(
            err.to_string(),
            "Request timeout: The server is taking too long to respond"
        );

        let err = Error::InvalidPage { page: 0 };
        assert!(err.to_string().contains("pages start at 1"));
    }

    #[test_case(Error::Connectivity => FetchErrorKind::Connectivity ; "connectivity")]
    #[test_case(Error::Timeout { timeout_ms: 1 } => FetchErrorKind::Timeout ; "timeout")]
    #[test_case(Error::server(503, "Service Unavailable") => FetchErrorKind::Server ; "server")]
    #[test_case(Error::unknown("bad body") => FetchErrorKind::Unknown ; "unknown")]
    #[test_case(Error::InvalidPage { page: 0 } => FetchErrorKind::Unknown ; "invalid page")]
    #[test_case(Error::config("x") => FetchErrorKind::Unknown ; "config")]
    fn test_fetch_kind(err: Error) -> FetchErrorKind {
        err.fetch_kind()
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
