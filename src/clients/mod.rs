//! HTTP client types for Goodreads API communication.
//!
//! This module provides the request dispatcher and the layers beneath it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GoodreadsClient`]: Dispatches requests and normalizes responses
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`AuthorizedRequest`]: A request with its credentials applied
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpResponse`]: A raw response from the transport
//! - [`GoodreadsError`]: The error type of every call
//! - [`classify`]: Maps HTTP statuses to [`ErrorKind`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use goodreads_api::{AuthRequirement, GoodreadsClient, HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/auth_user")
//!     .auth(AuthRequirement::User)
//!     .build();
//!
//! let user = client.execute(request).await?;
//! println!("Logged in as {}", user["name"]);
//! ```
//!
//! # Retry Behavior
//!
//! Calls are never retried. Every failure is returned to the caller as soon
//! as it is detected.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::GoodreadsClient;
pub use errors::{classify, ErrorKind, GoodreadsError, HttpResponseError, MAX_BODY_EXCERPT};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    AuthorizedRequest, HttpMethod, HttpRequest, HttpRequestBuilder, ParamEncoding, QueryParams,
};
pub use http_response::HttpResponse;
