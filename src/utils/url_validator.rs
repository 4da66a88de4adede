//! Original URL acceptance rules.
//!
//! A URL is accepted when it parses and carries both a scheme and a
//! non-empty host. Any scheme is allowed; the URL is stored as submitted.

use url::Url;

/// Reasons an original URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Validates a submitted URL and returns it without surrounding whitespace.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::InvalidFormat`] when the input does not parse as an
/// absolute URL, and [`UrlValidationError::MissingHost`] for URLs without a host
/// (`mailto:`, `file:///`, ...).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url(" https://example.com\n").unwrap(), "https://example.com");
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("mailto:user@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let candidate = input.trim();
    if candidate.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if parsed.scheme().is_empty() {
        return Err(UrlValidationError::InvalidFormat("missing scheme".to_string()));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(candidate),
        _ => Err(UrlValidationError::MissingHost),
    }
}
