//! Configuration error types for the Goodreads API client.
//!
//! This module contains the error type raised while building a client
//! configuration, and while choosing credentials for a call before any
//! network I/O happens.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use goodreads_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Every variant is raised synchronously, before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The options passed to the constructor were absent or not a mapping.
    #[error("Options hash required.")]
    OptionsRequired,

    /// The options mapping contained a value of the wrong shape.
    #[error("Invalid options: {reason}")]
    InvalidOptions {
        /// Why the options were rejected.
        reason: String,
    },

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Goodreads developer key.")]
    EmptyApiKey,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid Goodreads developer secret.")]
    EmptyApiSecret,

    /// One of the access token components was empty.
    #[error("Access token {component} cannot be empty.")]
    EmptyAccessToken {
        /// The empty component (e.g. `consumer_key`, `token`).
        component: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.goodreads.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A public call was made without an API key.
    #[error("An API key is required for public requests.")]
    MissingApiKey,

    /// A user-scoped call was made without a delegated access token.
    #[error("An OAuth access token is required to call '{path}'.")]
    MissingAccessToken {
        /// The path of the call that required the token.
        path: String,
    },
}
