//! Configuration types for the Goodreads API client.
//!
//! This module provides the configuration used to construct a
//! [`GoodreadsClient`](crate::GoodreadsClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GoodreadsConfig`]: The immutable configuration shared by every call
//! - [`GoodreadsConfigBuilder`]: A builder for constructing [`GoodreadsConfig`] instances
//! - [`ApiKey`]: A validated developer key newtype
//! - [`ApiSecret`]: A validated developer secret newtype with masked debug output
//! - [`BaseUrl`]: A validated API host URL
//! - [`ResponseFormat`]: The wire format requested from the API
//!
//! # Example
//!
//! ```rust
//! use goodreads_api::{ApiKey, GoodreadsConfig};
//!
//! let config = GoodreadsConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_key().unwrap().as_ref(), "my-api-key");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, BaseUrl};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::auth::AccessToken;
use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The wire format requested from the API.
///
/// This API version only speaks XML; the value is sent as the `format`
/// query parameter on reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// XML response bodies (`format=xml`).
    #[default]
    Xml,
}

impl ResponseFormat {
    /// Returns the value sent in the `format` query parameter.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Configuration for the Goodreads API client.
///
/// A configuration is created once per client and never mutated afterwards.
/// It is `Clone`, `Send`, and `Sync`, so concurrent calls may read it freely.
///
/// # Example
///
/// ```rust
/// use goodreads_api::{AccessToken, ApiKey, GoodreadsConfig};
///
/// let config = GoodreadsConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .access_token(AccessToken::new("key", "secret", "token", "token-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert!(config.access_token().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GoodreadsConfig {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    access_token: Option<AccessToken>,
    format: ResponseFormat,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl Default for GoodreadsConfig {
    /// Builds a fresh configuration with no credentials.
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            access_token: None,
            format: ResponseFormat::Xml,
            base_url: BaseUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent_prefix: None,
        }
    }
}

/// The recognized keys of an options mapping.
#[derive(Debug, Default, Deserialize)]
struct ClientOptions {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    oauth_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<f64>,
    user_agent_prefix: Option<String>,
}

impl GoodreadsConfig {
    /// Creates a new builder for constructing a `GoodreadsConfig`.
    #[must_use]
    pub fn builder() -> GoodreadsConfigBuilder {
        GoodreadsConfigBuilder::new()
    }

    /// Builds a configuration from a loosely-typed options mapping.
    ///
    /// Recognized keys are `api_key`, `api_secret`, `oauth_token` (an object
    /// with `consumer_key`, `consumer_secret`, `token` and `secret`),
    /// `base_url`, `timeout` (seconds) and `user_agent_prefix`. Unknown keys
    /// are ignored and an empty mapping yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OptionsRequired`] if `options` is `None` or is
    /// not a JSON object, and [`ConfigError::InvalidOptions`] if a recognized
    /// key holds a value of the wrong shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use goodreads_api::{ConfigError, GoodreadsConfig};
    /// use serde_json::json;
    ///
    /// let config = GoodreadsConfig::from_options(Some(&json!({"api_key": "K"}))).unwrap();
    /// assert_eq!(config.api_key().unwrap().as_ref(), "K");
    ///
    /// let result = GoodreadsConfig::from_options(Some(&json!("foo")));
    /// assert_eq!(result, Err(ConfigError::OptionsRequired));
    /// ```
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let Some(options @ serde_json::Value::Object(_)) = options else {
            return Err(ConfigError::OptionsRequired);
        };

        let raw = ClientOptions::deserialize(options).map_err(|e| ConfigError::InvalidOptions {
            reason: e.to_string(),
        })?;

        let mut builder = Self::builder();
        if let Some(key) = raw.api_key {
            builder = builder.api_key(key);
        }
        if let Some(secret) = raw.api_secret {
            builder = builder.api_secret(secret);
        }
        if let Some(token) = raw.oauth_token {
            builder = builder.access_token(token);
        }
        if let Some(url) = raw.base_url {
            builder = builder.base_url(url);
        }
        if let Some(seconds) = raw.timeout {
            let timeout = Duration::try_from_secs_f64(seconds)
                .ok()
                .filter(|t| !t.is_zero())
                .ok_or_else(|| ConfigError::InvalidOptions {
                    reason: format!("timeout must be a positive number of seconds, got {seconds}"),
                })?;
            builder = builder.timeout(timeout);
        }
        if let Some(prefix) = raw.user_agent_prefix {
            builder = builder.user_agent_prefix(prefix);
        }

        builder.build()
    }

    /// Returns the developer key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the developer secret, if configured.
    #[must_use]
    pub const fn api_secret(&self) -> Option<&ApiSecret> {
        self.api_secret.as_ref()
    }

    /// Returns the delegated access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the response format. Always XML for this API version.
    #[must_use]
    pub const fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the timeout applied to each call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GoodreadsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoodreadsConfig>();
};

/// Builder for constructing [`GoodreadsConfig`] instances.
///
/// Every field is optional. Credentials are only checked when a call needs
/// them, so a key-less configuration is valid until a public call is made.
///
/// # Defaults
///
/// - `base_url`: `https://www.goodreads.com`
/// - `timeout`: 30 seconds
/// - `format`: XML
#[derive(Debug, Default)]
pub struct GoodreadsConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl GoodreadsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the developer key used for public requests.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the developer secret.
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Sets the delegated access token used for user-scoped requests.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the base URL, e.g. to point at a test server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GoodreadsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if the timeout is zero.
    pub fn build(self) -> Result<GoodreadsConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidOptions {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(GoodreadsConfig {
            api_key: self.api_key,
            api_secret: self.api_secret,
            access_token: self.access_token,
            format: ResponseFormat::Xml,
            base_url: self.base_url.unwrap_or_default(),
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
