//! HTTP request types for the Goodreads API client.
//!
//! This module provides the [`HttpRequest`] descriptor and its builder, the
//! ordered [`QueryParams`] mapping, and the [`AuthorizedRequest`] that leaves
//! the auth layer ready to be sent.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::auth::AuthRequirement;

/// HTTP methods used by the Goodreads API.
///
/// Reads are GET; anything that mutates user state is POST.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads.
    Get,
    /// HTTP POST method for mutations.
    Post,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire and in signatures.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the parameters of a request are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamEncoding {
    /// Parameters go in the query string.
    #[default]
    Query,
    /// Parameters go in an `application/x-www-form-urlencoded` body.
    Form,
}

/// An ordered parameter mapping.
///
/// Keys are kept sorted so the encoded query string is deterministic.
///
/// # Example
///
/// ```rust
/// use goodreads_api::QueryParams;
///
/// let params = QueryParams::new().with("page", 2).with("per_page", 50);
/// assert_eq!(params.get("page"), Some("2"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Inserts a parameter and returns the mapping, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Merges every entry of `other` into this mapping. Entries of `other` win.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the mapping contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the mapping into owned key/value pairs in key order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0.into_iter().collect()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// A request descriptor for one call to the Goodreads API.
///
/// Use [`HttpRequest::builder`] to construct requests. The descriptor names
/// what to call and which credentials the call needs; the client adds the
/// format parameter and credentials when dispatching it.
///
/// # Example
///
/// ```rust
/// use goodreads_api::{AuthRequirement, HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/book/isbn")
///     .param("isbn", "0307463745")
///     .build();
///
/// assert_eq!(request.auth, AuthRequirement::Public);
/// assert_eq!(request.params.get("isbn"), Some("0307463745"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URL.
    pub path: String,
    /// Endpoint parameters.
    pub params: QueryParams,
    /// Placement of the parameters on the wire.
    pub encoding: ParamEncoding,
    /// Which credentials the call must carry.
    pub auth: AuthRequirement,
    /// Overrides the configured timeout for this call.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// Defaults to public auth and query-string parameters.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                params: QueryParams::new(),
                encoding: ParamEncoding::Query,
                auth: AuthRequirement::Public,
                timeout: None,
            },
        }
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.request.params.insert(key, value);
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    #[must_use]
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Merges a set of parameters, e.g. caller-supplied options.
    #[must_use]
    pub fn params(mut self, params: QueryParams) -> Self {
        self.request.params.extend(params);
        self
    }

    /// Sets the credentials the call requires.
    #[must_use]
    pub const fn auth(mut self, auth: AuthRequirement) -> Self {
        self.request.auth = auth;
        self
    }

    /// Sets where the parameters are placed.
    #[must_use]
    pub const fn encoding(mut self, encoding: ParamEncoding) -> Self {
        self.request.encoding = encoding;
        self
    }

    /// Overrides the configured timeout for this call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        self.request
    }
}

/// A fully assembled request, ready for the transport.
///
/// Produced by the client from an [`HttpRequest`] and then passed through a
/// [`RequestSigner`](crate::auth::oauth::RequestSigner) for user-scoped calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL without a query string.
    pub url: String,
    /// Query string parameters in send order.
    pub query: Vec<(String, String)>,
    /// Form body parameters, when the request has a form body.
    pub form: Option<Vec<(String, String)>>,
    /// Extra headers, e.g. `Authorization`.
    pub headers: Vec<(String, String)>,
    /// Timeout for this call.
    pub timeout: Duration,
}

impl AuthorizedRequest {
    /// Returns the value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of a query parameter.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
