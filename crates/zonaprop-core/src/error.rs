//! Error types for the ZonaProp scraper
//!
//! This module defines all error types used throughout the library.
//! ZonaPropError implements Serialize so results can cross JSON boundaries.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for ZonaProp scraper operations
#[derive(Error, Debug)]
pub enum ZonaPropError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a locally saved page failed
    #[error("failed to read local page: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse HTML or a scraped value
    #[error("failed to parse: {0}")]
    Parse(String),

    /// Required HTML element was not found
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The page did not expose an expected field
    #[error("field not present on page: {0}")]
    MissingField(String),

    /// Declared but deliberately unimplemented extraction
    #[error("extraction not supported: {0}")]
    NotSupported(&'static str),

    /// Invalid URL format
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Rate limited by the server (HTTP 429)
    #[error("rate limited - too many requests")]
    RateLimited,

    /// Requested page was not found (HTTP 404)
    #[error("page not found: {0}")]
    NotFound(String),
}

/// Serialize ZonaPropError as its display string
impl Serialize for ZonaPropError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for ZonaProp scraper operations
pub type Result<T> = std::result::Result<T, ZonaPropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = ZonaPropError::Parse("not a number: 'abc'".to_string());
        assert_eq!(error.to_string(), "failed to parse: not a number: 'abc'");
    }

    #[test]
    fn test_error_display_element_not_found() {
        let error = ZonaPropError::ElementNotFound("h2.title-location".to_string());
        assert_eq!(error.to_string(), "element not found: h2.title-location");
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = ZonaPropError::MissingField("Antigüedad".to_string());
        assert_eq!(error.to_string(), "field not present on page: Antigüedad");
    }

    #[test]
    fn test_error_display_not_supported() {
        let error = ZonaPropError::NotSupported("contacto");
        assert_eq!(error.to_string(), "extraction not supported: contacto");
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = ZonaPropError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "invalid URL: not-a-url");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let error = ZonaPropError::RateLimited;
        assert_eq!(error.to_string(), "rate limited - too many requests");
    }

    #[test]
    fn test_error_serialize() {
        let error = ZonaPropError::MissingField("Ambientes".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"field not present on page: Ambientes\"");
    }

    #[test]
    fn test_not_supported_is_distinguishable() {
        let error = ZonaPropError::NotSupported("ubicacion_mapa");
        assert!(matches!(error, ZonaPropError::NotSupported(_)));
        assert!(!matches!(error, ZonaPropError::MissingField(_)));
    }
}
