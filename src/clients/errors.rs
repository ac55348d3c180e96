//! Error types for Goodreads API calls.
//!
//! Every call returns [`GoodreadsError`] on failure. Errors are returned at
//! the point they are detected and are never retried.
//!
//! # Error Handling
//!
//! - [`GoodreadsError::Config`]: bad configuration or a missing credential,
//!   raised before any network I/O
//! - [`GoodreadsError::NotFound`], [`GoodreadsError::Unauthorized`],
//!   [`GoodreadsError::ValidationFailed`], [`GoodreadsError::ServiceUnavailable`],
//!   [`GoodreadsError::UnexpectedResponse`]: non-success HTTP statuses, see [`classify`]
//! - [`GoodreadsError::Transport`]: timeouts and connection failures
//! - [`GoodreadsError::MalformedResponse`]: a success body that is not XML
//! - [`GoodreadsError::Signing`]: the request signer refused the request
//!
//! # Example
//!
//! ```rust,ignore
//! use goodreads_api::GoodreadsError;
//!
//! match client.book_by_isbn("123456789").await {
//!     Ok(book) => println!("Found: {}", book["title"]),
//!     Err(GoodreadsError::NotFound(e)) => println!("No such book (HTTP {})", e.status),
//!     Err(e) => println!("Lookup failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::auth::oauth::SigningError;
use crate::error::ConfigError;
use crate::xml::XmlError;

/// Maximum number of characters of a response body kept in an error.
pub const MAX_BODY_EXCERPT: usize = 512;

/// The semantic category of a failed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad configuration or missing credentials.
    Configuration,
    /// HTTP 404.
    NotFound,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 422.
    ValidationFailed,
    /// HTTP 5xx.
    ServiceUnavailable,
    /// Any other status outside 2xx/3xx.
    UnexpectedResponse,
    /// Timeout, DNS or connection failure.
    Transport,
    /// A success body that failed XML parsing.
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "ConfigurationError",
            Self::NotFound => "NotFound",
            Self::Unauthorized => "Unauthorized",
            Self::ValidationFailed => "ValidationFailed",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::UnexpectedResponse => "UnexpectedResponse",
            Self::Transport => "TransportError",
            Self::MalformedResponse => "MalformedResponse",
        };
        f.write_str(name)
    }
}

/// Maps an HTTP status code to an error kind.
///
/// Returns `None` for 2xx and 3xx statuses, meaning the body should be parsed.
///
/// | status | kind |
/// |---|---|
/// | 404 | `NotFound` |
/// | 401 | `Unauthorized` |
/// | 422 | `ValidationFailed` |
/// | 5xx | `ServiceUnavailable` |
/// | other non-2xx/3xx | `UnexpectedResponse` |
///
/// # Example
///
/// ```rust
/// use goodreads_api::clients::{classify, ErrorKind};
///
/// assert_eq!(classify(200), None);
/// assert_eq!(classify(404), Some(ErrorKind::NotFound));
/// assert_eq!(classify(503), Some(ErrorKind::ServiceUnavailable));
/// assert_eq!(classify(418), Some(ErrorKind::UnexpectedResponse));
/// ```
#[must_use]
pub const fn classify(status: u16) -> Option<ErrorKind> {
    match status {
        200..=399 => None,
        401 => Some(ErrorKind::Unauthorized),
        404 => Some(ErrorKind::NotFound),
        422 => Some(ErrorKind::ValidationFailed),
        500..=599 => Some(ErrorKind::ServiceUnavailable),
        _ => Some(ErrorKind::UnexpectedResponse),
    }
}

/// Details of a response with a non-success status.
///
/// The body is kept only as a bounded excerpt and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("HTTP {status}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub status: u16,
    /// The first [`MAX_BODY_EXCERPT`] characters of the body.
    pub body: String,
}

impl HttpResponseError {
    /// Creates an error for `status`, keeping an excerpt of `body`.
    #[must_use]
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.chars().take(MAX_BODY_EXCERPT).collect(),
        }
    }
}

/// Unified error type for every Goodreads API call.
#[derive(Debug, Error)]
pub enum GoodreadsError {
    /// Bad constructor input or a missing credential.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found ({0})")]
    NotFound(HttpResponseError),

    /// The credentials were rejected (HTTP 401).
    #[error("Unauthorized ({0})")]
    Unauthorized(HttpResponseError),

    /// The API rejected the submitted data (HTTP 422).
    #[error("Validation failed ({0})")]
    ValidationFailed(HttpResponseError),

    /// The API is failing (HTTP 5xx).
    #[error("Service unavailable ({0})")]
    ServiceUnavailable(HttpResponseError),

    /// Any other non-success status.
    #[error("Unexpected response ({0})")]
    UnexpectedResponse(HttpResponseError),

    /// Timeout, DNS or connection failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success body that is not well-formed XML.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] XmlError),

    /// The request signer refused the request.
    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl GoodreadsError {
    /// Builds the error for a response status, or `None` for 2xx/3xx.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Option<Self> {
        classify(status).map(|kind| {
            let error = HttpResponseError::new(status, body);
            match kind {
                ErrorKind::NotFound => Self::NotFound(error),
                ErrorKind::Unauthorized => Self::Unauthorized(error),
                ErrorKind::ValidationFailed => Self::ValidationFailed(error),
                ErrorKind::ServiceUnavailable => Self::ServiceUnavailable(error),
                _ => Self::UnexpectedResponse(error),
            }
        })
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::Signing(_) => ErrorKind::Configuration,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::ValidationFailed(_) => ErrorKind::ValidationFailed,
            Self::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            Self::UnexpectedResponse(_) => ErrorKind::UnexpectedResponse,
            Self::Transport(_) => ErrorKind::Transport,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Returns the HTTP status, for errors produced from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.response() {
            Some(response) => Some(response.status),
            None => None,
        }
    }

    /// Returns the response details, for errors produced from a response.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::NotFound(e)
            | Self::Unauthorized(e)
            | Self::ValidationFailed(e)
            | Self::ServiceUnavailable(e)
            | Self::UnexpectedResponse(e) => Some(e),
            _ => None,
        }
    }
}
