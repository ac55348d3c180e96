//! Delegated OAuth 1.0a credentials.
//!
//! An [`AccessToken`] pairs the application's consumer credentials with the
//! token a user granted to it. It is the credential handed to a
//! [`RequestSigner`](crate::auth::oauth::RequestSigner) for user-scoped calls.

use std::fmt;

use serde::{de, Deserialize, Deserializer};

use crate::error::ConfigError;

/// OAuth 1.0a consumer and token credentials for user-scoped requests.
///
/// Secrets are masked in `Debug` output.
///
/// # Example
///
/// ```rust
/// use goodreads_api::AccessToken;
///
/// let token = AccessToken::new("API_KEY", "API_SECRET", "ACCESS_TOKEN", "ACCESS_SECRET").unwrap();
/// assert_eq!(token.token(), "ACCESS_TOKEN");
/// assert!(!format!("{token:?}").contains("ACCESS_SECRET"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl AccessToken {
    /// Creates a new access token from its four components.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] naming the first empty component.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let access_token = Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        };

        for (component, value) in [
            ("consumer_key", &access_token.consumer_key),
            ("consumer_secret", &access_token.consumer_secret),
            ("token", &access_token.token),
            ("token_secret", &access_token.token_secret),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyAccessToken { component });
            }
        }

        Ok(access_token)
    }

    /// Returns the consumer (application) key.
    #[must_use]
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Returns the consumer (application) secret.
    #[must_use]
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// Returns the user's access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the user's access token secret.
    #[must_use]
    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"*****")
            .field("token", &self.token)
            .field("token_secret", &"*****")
            .finish()
    }
}

#[derive(Deserialize)]
struct RawAccessToken {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    #[serde(alias = "token_secret")]
    secret: String,
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAccessToken::deserialize(deserializer)?;
        Self::new(raw.consumer_key, raw.consumer_secret, raw.token, raw.secret)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_components() {
        let result = AccessToken::new("key", "secret", "", "token-secret");
        assert_eq!(
            result,
            Err(ConfigError::EmptyAccessToken { component: "token" })
        );

        let result = AccessToken::new("", "secret", "token", "token-secret");
        assert_eq!(
            result,
            Err(ConfigError::EmptyAccessToken {
                component: "consumer_key"
            })
        );
    }

    #[test]
    fn test_debug_masks_secrets() {
        let token = AccessToken::new("key", "consumer-secret", "token", "token-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(debug.contains("key"));
        assert!(!debug.contains("consumer-secret"));
        assert!(!debug.contains("token-secret"));
    }

    #[test]
    fn test_deserializes_from_options_shape() {
        let json = serde_json::json!({
            "consumer_key": "API_KEY",
            "consumer_secret": "SECRET_KEY",
            "token": "ACCESS_TOKEN",
            "secret": "ACCESS_SECRET"
        });
        let token: AccessToken = serde_json::from_value(json).unwrap();
        assert_eq!(token.consumer_key(), "API_KEY");
        assert_eq!(token.token_secret(), "ACCESS_SECRET");
    }
}
