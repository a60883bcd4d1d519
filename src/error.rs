//! Error types for the pricewatch library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`PricewatchError`] enum. The scoring core itself never fails on
//! well-formed text input; errors come from the CLI surface, the scraper
//! boundary, and registry lookups.

use std::io;

use thiserror::Error;

/// The main error type for pricewatch operations.
#[derive(Error, Debug)]
pub enum PricewatchError {
    /// I/O errors (listing files, CLI input).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (empty search term, invalid input).
    #[error("Query error: {0}")]
    Query(String),

    /// Scraper boundary errors, reported by a scraper implementation.
    #[error("Scraper error: {0}")]
    Scraper(String),

    /// Registry errors (unknown domain, invalid URL, disallowed scheme).
    #[error("Registry error: {0}")]
    Registry(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parse errors from the registry's allow-list check.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PricewatchError.
pub type Result<T> = std::result::Result<T, PricewatchError>;

impl PricewatchError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PricewatchError::Query(msg.into())
    }

    /// Create a new scraper error.
    pub fn scraper<S: Into<String>>(msg: S) -> Self {
        PricewatchError::Scraper(msg.into())
    }

    /// Create a new registry error.
    pub fn registry<S: Into<String>>(msg: S) -> Self {
        PricewatchError::Registry(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PricewatchError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PricewatchError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PricewatchError::query("empty search term");
        assert_eq!(error.to_string(), "Query error: empty search term");

        let error = PricewatchError::registry("domain not allowed");
        assert_eq!(error.to_string(), "Registry error: domain not allowed");

        let error = PricewatchError::scraper("selector matched nothing");
        assert_eq!(error.to_string(), "Scraper error: selector matched nothing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "listings file not found");
        let error = PricewatchError::from(io_error);

        match error {
            PricewatchError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
