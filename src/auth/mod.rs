//! Authentication strategy for Goodreads API calls.
//!
//! Every call is made in one of two modes:
//!
//! - **Key mode**: public reads carry the developer key as the `key` query
//!   parameter.
//! - **Token mode**: calls that act for a user (shelf and ownership edits,
//!   "who am I" lookups, friend lists) are signed with a delegated
//!   [`AccessToken`] through a [`RequestSigner`](oauth::RequestSigner).
//!
//! Each request declares an [`AuthRequirement`]; [`select_mode`] turns it
//! into an [`AuthMode`] or fails before any network I/O if the matching
//! credential is missing.
//!
//! # Example
//!
//! ```rust
//! use goodreads_api::auth::{select_mode, AuthMode, AuthRequirement};
//! use goodreads_api::{ApiKey, ConfigError, GoodreadsConfig};
//!
//! let config = GoodreadsConfig::builder()
//!     .api_key(ApiKey::new("K").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mode = select_mode(&config, AuthRequirement::Public, "/book/show").unwrap();
//! assert!(matches!(mode, AuthMode::Key(_)));
//!
//! let result = select_mode(&config, AuthRequirement::User, "/api/auth_user");
//! assert!(matches!(result, Err(ConfigError::MissingAccessToken { .. })));
//! ```

mod access_token;
pub mod oauth;

pub use access_token::AccessToken;

use std::fmt;

use crate::config::{ApiKey, GoodreadsConfig};
use crate::error::ConfigError;

/// The credentials a call needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthRequirement {
    /// An anonymous read; the developer key is enough.
    #[default]
    Public,
    /// The call acts on behalf of a user and must be signed.
    User,
}

impl AuthRequirement {
    /// Returns `true` if the call must carry a user's delegated token.
    #[must_use]
    pub const fn requires_user_context(&self) -> bool {
        matches!(self, Self::User)
    }
}

/// The authentication strategy chosen for one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode<'a> {
    /// Append the developer key as a query parameter.
    Key(&'a ApiKey),
    /// Sign the request with the delegated access token.
    Token(&'a AccessToken),
}

impl AuthMode<'_> {
    /// Returns a short label for logging. Never includes credentials.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::Token(_) => "token",
        }
    }
}

impl fmt::Display for AuthMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chooses the authentication mode for a call to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] for a public call without a
/// developer key, and [`ConfigError::MissingAccessToken`] for a user-scoped
/// call without an access token.
pub fn select_mode<'a>(
    config: &'a GoodreadsConfig,
    requirement: AuthRequirement,
    path: &str,
) -> Result<AuthMode<'a>, ConfigError> {
    if requirement.requires_user_context() {
        config
            .access_token()
            .map(AuthMode::Token)
            .ok_or_else(|| ConfigError::MissingAccessToken {
                path: path.to_string(),
            })
    } else {
        config
            .api_key()
            .map(AuthMode::Key)
            .ok_or(ConfigError::MissingApiKey)
    }
}
