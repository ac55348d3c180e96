//! Signing error types.

use thiserror::Error;

/// Errors that can occur while signing a request.
///
/// # Example
///
/// ```rust
/// use goodreads_api::auth::oauth::SigningError;
///
/// let error = SigningError::InvalidUrl { url: "book/show".to_string() };
/// assert!(error.to_string().contains("book/show"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    /// The request URL has no scheme or host and cannot be normalized.
    #[error("Cannot sign request for URL '{url}': expected an absolute http(s) URL")]
    InvalidUrl {
        /// The URL that could not be normalized.
        url: String,
    },

    /// A custom signer rejected the request.
    #[error("Request signing failed: {reason}")]
    Rejected {
        /// Why the signer refused.
        reason: String,
    },
}
