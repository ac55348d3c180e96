//! Raw HTTP response type returned by the transport.

/// A response as received from the wire, before classification or parsing.
///
/// # Example
///
/// ```rust
/// use goodreads_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(201, "");
/// assert!(response.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` if the body is empty or whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
