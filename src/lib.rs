//! # Goodreads API Rust Client
//!
//! An async Rust client for the Goodreads XML API, providing type-safe
//! configuration, per-call authentication, and a normalized view of the XML
//! the API returns.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GoodreadsConfig`] and [`GoodreadsConfigBuilder`]
//! - Validated newtypes for API credentials and the API host
//! - Key-based access for public reads and OAuth 1.0a signing for calls made
//!   on behalf of a user, see [`auth`]
//! - An async request dispatcher with a typed error taxonomy, see [`clients`]
//! - XML normalization into a navigable [`Node`] tree, see [`xml`]
//! - One method per API operation on [`GoodreadsClient`], see [`api`]
//!
//! ## Quick Start
//!
//! ```rust
//! use goodreads_api::{ApiKey, GoodreadsClient, GoodreadsConfig};
//!
//! // Create configuration using the builder pattern
//! let config = GoodreadsConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = GoodreadsClient::new(config);
//! assert!(client.config().access_token().is_none());
//! ```
//!
//! Or from a loosely-typed options mapping:
//!
//! ```rust
//! use goodreads_api::{ConfigError, GoodreadsClient};
//! use serde_json::json;
//!
//! let client = GoodreadsClient::from_options(Some(&json!({"api_key": "K"})));
//! assert!(client.is_ok());
//!
//! let error = GoodreadsClient::from_options(Some(&json!("K"))).unwrap_err();
//! assert_eq!(error, ConfigError::OptionsRequired);
//! assert_eq!(error.to_string(), "Options hash required.");
//! ```
//!
//! ## Public Reads
//!
//! ```rust,ignore
//! use goodreads_api::{GoodreadsClient, QueryParams};
//!
//! let book = client.book_by_isbn("0307463745").await?;
//! println!("{}", book["title"]);
//!
//! let search = client.search_books("Rework", QueryParams::new()).await?;
//! for work in search["results"]["work"].items() {
//!     println!("{}", work["best_book"]["title"]);
//! }
//! ```
//!
//! ## Acting for a User
//!
//! Shelf edits, ownership records, friend lists and "who am I" lookups need
//! the user's delegated OAuth token:
//!
//! ```rust,ignore
//! use goodreads_api::{AccessToken, GoodreadsClient, GoodreadsConfig};
//!
//! let token = AccessToken::new("consumer-key", "consumer-secret", "token", "token-secret")?;
//! let client = GoodreadsClient::new(GoodreadsConfig::builder().access_token(token).build()?);
//!
//! let user_id = client.user_id().await?;
//! client.add_book_to_shelf(1157446, "to-read").await?;
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`GoodreadsError`]. Missing credentials are reported
//! before any request is sent; HTTP failures are classified by status with
//! [`classify`]. Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client is `Send + Sync` and holds no mutable state
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No coercion**: Response values stay strings; callers parse what they need

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod xml;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AuthMode, AuthRequirement};
pub use config::{
    ApiKey, ApiSecret, BaseUrl, GoodreadsConfig, GoodreadsConfigBuilder, ResponseFormat,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    classify, AuthorizedRequest, ErrorKind, GoodreadsClient, GoodreadsError, HttpMethod,
    HttpRequest, HttpRequestBuilder, HttpResponseError, ParamEncoding, QueryParams,
};

// Re-export response types
pub use api::{BookList, FriendList, GroupList, Pagination, SeriesBooks, Shelf, ShelfList};
pub use xml::Node;
