//! HTTP transport for Goodreads API communication.
//!
//! This module provides the [`HttpClient`] type that puts an
//! [`AuthorizedRequest`] on the wire and returns the raw response. It does
//! not interpret statuses or bodies.

use crate::clients::http_request::{AuthorizedRequest, HttpMethod};
use crate::clients::http_response::HttpResponse;
use crate::config::GoodreadsConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Goodreads API.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - The configured default timeout, overridable per request
/// - Query string and form body placement
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and wraps a pooled `reqwest::Client`, so one
/// instance can serve concurrent calls.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: Vec<(String, String)>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use goodreads_api::clients::HttpClient;
    /// use goodreads_api::GoodreadsConfig;
    ///
    /// let client = HttpClient::new(&GoodreadsConfig::default());
    /// assert!(client.user_agent().unwrap().contains("Goodreads API Library"));
    /// ```
    #[must_use]
    pub fn new(config: &GoodreadsConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Goodreads API Library v{SDK_VERSION} | Rust {rust_version}");

        let default_headers = vec![
            ("User-Agent".to_string(), user_agent),
            ("Accept".to_string(), "application/xml".to_string()),
        ];

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.default_headers
            .iter()
            .find(|(key, _)| key == "User-Agent")
            .map(|(_, value)| value.as_str())
    }

    /// Sends a request and returns the raw response.
    ///
    /// Any status is returned as a response; only failures to complete the
    /// exchange are errors.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] on timeout, DNS or connection failure, or if
    /// the body cannot be read.
    pub async fn send(&self, request: &AuthorizedRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in self.default_headers.iter().chain(&request.headers) {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(form) = &request.form {
            req_builder = req_builder.form(form);
        }

        let res = req_builder.timeout(request.timeout).send().await?;

        let code = res.status().as_u16();
        let body = res.text().await?;

        Ok(HttpResponse::new(code, body))
    }
}
