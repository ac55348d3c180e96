//! OAuth 1.0a request signing for user-scoped calls.
//!
//! Goodreads authorizes calls made on behalf of a user with OAuth 1.0a.
//! The token dance that produces an [`AccessToken`](crate::AccessToken)
//! happens outside this crate; this module only signs requests with it.
//!
//! - [`RequestSigner`]: the signing capability the client consumes
//! - [`OAuth1Signer`]: the default HMAC implementation
//! - [`SignatureMethod`]: `HMAC-SHA1` (default) or `HMAC-SHA256`
//! - [`hmac`]: percent-encoding and HMAC primitives
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use goodreads_api::auth::oauth::{OAuth1Signer, SignatureMethod};
//! use goodreads_api::{GoodreadsClient, GoodreadsConfig};
//!
//! let client = GoodreadsClient::with_signer(
//!     GoodreadsConfig::default(),
//!     Arc::new(OAuth1Signer::new(SignatureMethod::HmacSha256)),
//! );
//! ```

mod error;
pub mod hmac;
mod signer;

pub use error::SigningError;
pub use signer::{
    generate_nonce, normalize_url, signature_base_string, OAuth1Signer, RequestSigner,
    SignatureMethod, NONCE_LENGTH, OAUTH_VERSION,
};
