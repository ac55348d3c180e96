//! HMAC signatures and percent-encoding for OAuth 1.0a.
//!
//! OAuth 1.0a signs a "signature base string" with a key built from the
//! consumer secret and the token secret. Both the base string and the key
//! use RFC 3986 percent-encoding, where only `A-Z a-z 0-9 - . _ ~` pass
//! through unescaped.
//!
//! # Example
//!
//! ```rust
//! use goodreads_api::auth::oauth::hmac::{compute_signature, percent_encode, signing_key};
//! use goodreads_api::auth::oauth::SignatureMethod;
//!
//! assert_eq!(percent_encode("a b+c"), "a%20b%2Bc");
//!
//! let key = signing_key("consumer secret", "token secret");
//! assert_eq!(key, "consumer%20secret&token%20secret");
//!
//! let signature = compute_signature(SignatureMethod::HmacSha1, &key, "GET&...");
//! assert_eq!(signature.len(), 28); // Base64 of 20 bytes
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::auth::oauth::SignatureMethod;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Percent-encodes a value per RFC 3986, as OAuth 1.0a requires.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the HMAC key: `encode(consumer_secret) & encode(token_secret)`.
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Signs `base_string` with `key`, returning standard base64.
///
/// # Note
///
/// HMAC accepts keys of any length, so this never panics.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(method: SignatureMethod, key: &str, base_string: &str) -> String {
    match method {
        SignatureMethod::HmacSha1 => {
            let mut mac =
                HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
            mac.update(base_string.as_bytes());
            BASE64_STANDARD.encode(mac.finalize().into_bytes())
        }
        SignatureMethod::HmacSha256 => {
            let mut mac =
                HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
            mac.update(base_string.as_bytes());
            BASE64_STANDARD.encode(mac.finalize().into_bytes())
        }
    }
}
