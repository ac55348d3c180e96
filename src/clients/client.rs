//! The Goodreads request dispatcher.
//!
//! [`GoodreadsClient`] turns an [`HttpRequest`] into a normalized [`Node`]:
//!
//! 1. choose key or token mode for the call, failing before any I/O if the
//!    needed credential is missing
//! 2. add `format=xml` to reads and `key` in key mode
//! 3. sign the request in token mode
//! 4. send it, classify the status, and normalize the XML body
//!
//! The endpoint methods in [`crate::api`] are thin wrappers over
//! [`GoodreadsClient::execute`].

use std::sync::Arc;

use crate::auth::oauth::{OAuth1Signer, RequestSigner};
use crate::auth::{select_mode, AuthMode};
use crate::clients::errors::GoodreadsError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{AuthorizedRequest, HttpMethod, HttpRequest, ParamEncoding};
use crate::config::GoodreadsConfig;
use crate::error::ConfigError;
use crate::xml::{self, Node};

/// Client for the Goodreads XML API.
///
/// The client holds only immutable configuration and a pooled transport, so
/// it is `Send + Sync` and can be shared across tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use goodreads_api::GoodreadsClient;
/// use serde_json::json;
///
/// let client = GoodreadsClient::from_options(Some(&json!({"api_key": "K"})))?;
/// let book = client.book_by_isbn("0307463745").await?;
/// println!("{}", book["title"]);
/// ```
#[derive(Debug)]
pub struct GoodreadsClient {
    config: GoodreadsConfig,
    http_client: HttpClient,
    signer: Arc<dyn RequestSigner>,
}

// Verify GoodreadsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoodreadsClient>();
};

impl GoodreadsClient {
    /// Creates a client that signs user-scoped calls with OAuth 1.0a HMAC-SHA1.
    #[must_use]
    pub fn new(config: GoodreadsConfig) -> Self {
        Self::with_signer(config, Arc::new(OAuth1Signer::default()))
    }

    /// Creates a client with a custom request signer.
    #[must_use]
    pub fn with_signer(config: GoodreadsConfig, signer: Arc<dyn RequestSigner>) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            config,
            http_client,
            signer,
        }
    }

    /// Creates a client from a loosely-typed options mapping.
    ///
    /// See [`GoodreadsConfig::from_options`] for the accepted keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OptionsRequired`] if `options` is absent or not
    /// a mapping, or another [`ConfigError`] if a value is invalid.
    pub fn from_options(options: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        GoodreadsConfig::from_options(options).map(Self::new)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GoodreadsConfig {
        &self.config
    }

    /// Assembles and authorizes a request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] if the credential the call requires
    /// is missing, or [`GoodreadsError::Signing`] if signing fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use goodreads_api::{GoodreadsClient, HttpMethod, HttpRequest};
    /// use serde_json::json;
    ///
    /// let client = GoodreadsClient::from_options(Some(&json!({"api_key": "K"}))).unwrap();
    /// let request = HttpRequest::builder(HttpMethod::Get, "/book/isbn")
    ///     .param("isbn", "0307463745")
    ///     .build();
    ///
    /// let prepared = client.prepare(request).unwrap();
    /// assert_eq!(prepared.url, "https://www.goodreads.com/book/isbn");
    /// assert_eq!(prepared.query_param("format"), Some("xml"));
    /// assert_eq!(prepared.query_param("key"), Some("K"));
    /// ```
    pub fn prepare(&self, request: HttpRequest) -> Result<AuthorizedRequest, GoodreadsError> {
        let mode = select_mode(&self.config, request.auth, &request.path)?;

        let mut params = request.params;
        if request.http_method == HttpMethod::Get {
            params.insert("format", self.config.format());
        }
        if let AuthMode::Key(key) = mode {
            let key: &str = key.as_ref();
            params.insert("key", key);
        }

        let pairs = params.into_pairs();
        let use_form =
            request.encoding == ParamEncoding::Form && request.http_method == HttpMethod::Post;
        let (query, form) = if use_form {
            (Vec::new(), Some(pairs))
        } else {
            (pairs, None)
        };

        let prepared = AuthorizedRequest {
            method: request.http_method,
            url: self.config.base_url().join(&request.path),
            query,
            form,
            headers: Vec::new(),
            timeout: request.timeout.unwrap_or_else(|| self.config.timeout()),
        };

        tracing::debug!(
            method = %prepared.method,
            path = %request.path,
            auth = mode.label(),
            "Prepared Goodreads API request"
        );

        match mode {
            AuthMode::Key(_) => Ok(prepared),
            AuthMode::Token(token) => Ok(self.signer.sign(token, prepared)?),
        }
    }

    /// Sends a request and returns its normalized response.
    ///
    /// An empty success body yields [`Node::Null`]. Non-success statuses are
    /// mapped to errors without parsing the body.
    ///
    /// # Errors
    ///
    /// - [`GoodreadsError::Config`] if a required credential is missing; no
    ///   request is sent
    /// - a status error ([`GoodreadsError::NotFound`] and friends) for
    ///   non-2xx/3xx responses
    /// - [`GoodreadsError::Transport`] on timeout or connection failure
    /// - [`GoodreadsError::MalformedResponse`] if a success body is not XML
    pub async fn execute(&self, request: HttpRequest) -> Result<Node, GoodreadsError> {
        let path = request.path.clone();
        let prepared = self.prepare(request)?;

        let response = self.http_client.send(&prepared).await.map_err(|error| {
            tracing::warn!(path = %path, error = %error, "Goodreads API request failed");
            GoodreadsError::Transport(error)
        })?;

        if let Some(error) = GoodreadsError::from_response(response.code, &response.body) {
            tracing::warn!(
                path = %path,
                status = response.code,
                kind = %error.kind(),
                "Goodreads API returned an error status"
            );
            return Err(error);
        }

        if response.is_empty() {
            tracing::debug!(path = %path, status = response.code, "Empty response body");
            return Ok(Node::Null);
        }

        Ok(xml::parse(&response.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthRequirement;
    use crate::{AccessToken, ApiKey};
    use std::time::Duration;

    fn token() -> AccessToken {
        AccessToken::new("API_KEY", "SECRET_KEY", "ACCESS_TOKEN", "ACCESS_SECRET").unwrap()
    }

    fn key_client() -> GoodreadsClient {
        GoodreadsClient::new(
            GoodreadsConfig::builder()
                .api_key(ApiKey::new("K").unwrap())
                .build()
                .unwrap(),
        )
    }

    fn token_client() -> GoodreadsClient {
        GoodreadsClient::new(
            GoodreadsConfig::builder()
                .api_key(ApiKey::new("K").unwrap())
                .access_token(token())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_key_mode_adds_format_and_key() {
        let request = HttpRequest::builder(HttpMethod::Get, "/search/index")
            .param("q", "Rework")
            .build();
        let prepared = key_client().prepare(request).unwrap();

        assert_eq!(prepared.query_param("format"), Some("xml"));
        assert_eq!(prepared.query_param("key"), Some("K"));
        assert_eq!(prepared.query_param("q"), Some("Rework"));
        assert!(prepared.header("Authorization").is_none());
        assert!(prepared.form.is_none());
    }

    #[test]
    fn test_caller_params_cannot_override_format() {
        let request = HttpRequest::builder(HttpMethod::Get, "/search/index")
            .param("q", "Rework")
            .params(crate::QueryParams::new().with("format", "json"))
            .build();
        let prepared = key_client().prepare(request).unwrap();

        assert_eq!(prepared.query_param("format"), Some("xml"));
        assert_eq!(
            prepared.query.iter().filter(|(name, _)| name == "format").count(),
            1
        );
    }

    #[test]
    fn test_token_mode_signs_without_key_param() {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/auth_user")
            .auth(AuthRequirement::User)
            .build();
        let prepared = token_client().prepare(request).unwrap();

        assert_eq!(prepared.query_param("format"), Some("xml"));
        assert!(prepared.query_param("key").is_none());
        let header = prepared.header("Authorization").unwrap();
        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_token=\"ACCESS_TOKEN\""));
        assert!(header.contains("oauth_signature=\""));
    }

    #[test]
    fn test_post_has_no_format_param() {
        let request = HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
            .param("name", "to-read")
            .param("book_id", 123)
            .auth(AuthRequirement::User)
            .build();
        let prepared = token_client().prepare(request).unwrap();

        assert!(prepared.query_param("format").is_none());
        assert_eq!(prepared.query_param("name"), Some("to-read"));
        assert_eq!(prepared.query_param("book_id"), Some("123"));
    }

    #[test]
    fn test_form_encoding_moves_params_to_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "/owned_books.xml")
            .param("owned_book[book_id]", 7)
            .encoding(ParamEncoding::Form)
            .auth(AuthRequirement::User)
            .build();
        let prepared = token_client().prepare(request).unwrap();

        assert!(prepared.query.is_empty());
        let form = prepared.form.unwrap();
        assert_eq!(form, vec![("owned_book[book_id]".to_string(), "7".to_string())]);
    }

    #[test]
    fn test_missing_token_fails_before_dispatch() {
        let request = HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
            .auth(AuthRequirement::User)
            .build();
        let error = key_client().prepare(request).unwrap_err();
        assert!(matches!(
            error,
            GoodreadsError::Config(ConfigError::MissingAccessToken { .. })
        ));
    }

    #[test]
    fn test_timeout_override() {
        let request = HttpRequest::builder(HttpMethod::Get, "/book/show/1")
            .timeout(Duration::from_secs(2))
            .build();
        let prepared = key_client().prepare(request).unwrap();
        assert_eq!(prepared.timeout, Duration::from_secs(2));

        let request = HttpRequest::builder(HttpMethod::Get, "/book/show/1").build();
        let prepared = key_client().prepare(request).unwrap();
        assert_eq!(prepared.timeout, crate::config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_options_requires_mapping() {
        let error = GoodreadsClient::from_options(Some(&serde_json::json!("K"))).unwrap_err();
        assert_eq!(error, ConfigError::OptionsRequired);
        let error = GoodreadsClient::from_options(None).unwrap_err();
        assert_eq!(error, ConfigError::OptionsRequired);
    }
}
