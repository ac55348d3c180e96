//! OAuth 1.0a request signing.
//!
//! This module provides the [`RequestSigner`] capability consumed by the
//! client for user-scoped calls, and [`OAuth1Signer`], the default
//! implementation that adds an `Authorization: OAuth ...` header.
//!
//! # Signature Base String
//!
//! The signed message is `METHOD&encode(url)&encode(params)`, where `url` is
//! the request URL with a lowercase scheme and host, no default port and no
//! query, and `params` is every query, form and `oauth_*` parameter,
//! percent-encoded, sorted by key then value, and joined with `&`.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::auth::oauth::hmac::{compute_signature, percent_encode, signing_key};
use crate::auth::oauth::SigningError;
use crate::auth::AccessToken;
use crate::clients::{AuthorizedRequest, HttpMethod};

/// The length of generated nonces.
pub const NONCE_LENGTH: usize = 32;

/// The OAuth protocol version sent with every signature.
pub const OAUTH_VERSION: &str = "1.0";

/// Signs outgoing requests on behalf of a user.
///
/// Implementations receive the delegated credential and an assembled request,
/// and return the request with whatever the provider needs to authorize it
/// (typically an `Authorization` header). Signing performs no network I/O.
///
/// # Example
///
/// ```rust
/// use goodreads_api::auth::oauth::{RequestSigner, SigningError};
/// use goodreads_api::{AccessToken, AuthorizedRequest};
///
/// #[derive(Debug)]
/// struct BearerSigner;
///
/// impl RequestSigner for BearerSigner {
///     fn sign(
///         &self,
///         token: &AccessToken,
///         mut request: AuthorizedRequest,
///     ) -> Result<AuthorizedRequest, SigningError> {
///         request
///             .headers
///             .push(("Authorization".to_string(), format!("Bearer {}", token.token())));
///         Ok(request)
///     }
/// }
/// ```
pub trait RequestSigner: fmt::Debug + Send + Sync {
    /// Returns `request` authorized with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError`] if the request cannot be signed.
    fn sign(
        &self,
        token: &AccessToken,
        request: AuthorizedRequest,
    ) -> Result<AuthorizedRequest, SigningError>;
}

/// The HMAC algorithm used for OAuth 1.0a signatures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignatureMethod {
    /// `HMAC-SHA1`, the method the Goodreads API expects.
    #[default]
    HmacSha1,
    /// `HMAC-SHA256`.
    HmacSha256,
}

impl SignatureMethod {
    /// Returns the `oauth_signature_method` value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HmacSha1 => "HMAC-SHA1",
            Self::HmacSha256 => "HMAC-SHA256",
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth 1.0a HMAC request signer.
///
/// Each call to [`sign`](RequestSigner::sign) uses a fresh random nonce and
/// the current Unix timestamp.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use goodreads_api::auth::oauth::{OAuth1Signer, RequestSigner};
/// use goodreads_api::{AccessToken, AuthorizedRequest, HttpMethod};
///
/// let token = AccessToken::new("API_KEY", "SECRET_KEY", "ACCESS_TOKEN", "ACCESS_SECRET").unwrap();
/// let request = AuthorizedRequest {
///     method: HttpMethod::Get,
///     url: "https://www.goodreads.com/api/auth_user".to_string(),
///     query: vec![("format".to_string(), "xml".to_string())],
///     form: None,
///     headers: Vec::new(),
///     timeout: Duration::from_secs(30),
/// };
///
/// let signed = OAuth1Signer::default().sign(&token, request).unwrap();
/// assert!(signed.header("Authorization").unwrap().starts_with("OAuth "));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OAuth1Signer {
    method: SignatureMethod,
}

impl OAuth1Signer {
    /// Creates a signer using the given signature method.
    #[must_use]
    pub const fn new(method: SignatureMethod) -> Self {
        Self { method }
    }

    /// Returns the signature method.
    #[must_use]
    pub const fn method(&self) -> SignatureMethod {
        self.method
    }

    /// Signs `request` with an explicit nonce and timestamp.
    ///
    /// [`sign`](RequestSigner::sign) calls this with generated values; it is
    /// exposed so signatures can be reproduced.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::InvalidUrl`] if the request URL is not an
    /// absolute http(s) URL.
    pub fn sign_with(
        &self,
        token: &AccessToken,
        mut request: AuthorizedRequest,
        nonce: &str,
        timestamp: i64,
    ) -> Result<AuthorizedRequest, SigningError> {
        let url = normalize_url(&request.url)?;

        let oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".into(), token.consumer_key().into()),
            ("oauth_nonce".into(), nonce.into()),
            ("oauth_signature_method".into(), self.method.as_str().into()),
            ("oauth_timestamp".into(), timestamp.to_string()),
            ("oauth_token".into(), token.token().into()),
            ("oauth_version".into(), OAUTH_VERSION.into()),
        ];

        let signed_params: Vec<(String, String)> = request
            .query
            .iter()
            .chain(request.form.iter().flatten())
            .chain(oauth_params.iter())
            .cloned()
            .collect();

        let base_string = signature_base_string(request.method, &url, &signed_params);
        let key = signing_key(token.consumer_secret(), token.token_secret());
        let signature = compute_signature(self.method, &key, &base_string);

        let mut header_params = oauth_params;
        header_params.push(("oauth_signature".into(), signature));
        header_params.sort();

        let header = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        request
            .headers
            .push(("Authorization".to_string(), format!("OAuth {header}")));

        Ok(request)
    }
}

impl RequestSigner for OAuth1Signer {
    fn sign(
        &self,
        token: &AccessToken,
        request: AuthorizedRequest,
    ) -> Result<AuthorizedRequest, SigningError> {
        let nonce = generate_nonce();
        let timestamp = chrono::Utc::now().timestamp();
        self.sign_with(token, request, &nonce, timestamp)
    }
}

// Verify OAuth1Signer is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuth1Signer>();
};

/// Generates a random alphanumeric nonce of [`NONCE_LENGTH`] characters.
#[must_use]
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Normalizes a URL for the signature base string.
///
/// The scheme and host are lowercased, the default port is removed, and any
/// query or fragment is dropped.
///
/// # Errors
///
/// Returns [`SigningError::InvalidUrl`] for URLs without an http(s) scheme or host.
pub fn normalize_url(url: &str) -> Result<String, SigningError> {
    let invalid = || SigningError::InvalidUrl {
        url: url.to_string(),
    };

    let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(invalid());
    }

    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    let (authority, path) = rest
        .find('/')
        .map_or((rest, "/"), |i| (&rest[..i], &rest[i..]));
    if authority.is_empty() {
        return Err(invalid());
    }

    let authority = authority.to_ascii_lowercase();
    let default_port = if scheme == "http" { ":80" } else { ":443" };
    let authority = authority
        .strip_suffix(default_port)
        .unwrap_or(&authority);

    Ok(format!("{scheme}://{authority}{path}"))
}

/// Builds the OAuth 1.0a signature base string.
#[must_use]
pub fn signature_base_string(
    method: HttpMethod,
    normalized_url: &str,
    params: &[(String, String)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode(normalized_url),
        percent_encode(&param_string)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    // Published reference example for HMAC-SHA1 request signing.
    fn reference_token() -> AccessToken {
        AccessToken::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
        .unwrap()
    }

    fn reference_request() -> AuthorizedRequest {
        AuthorizedRequest {
            method: HttpMethod::Post,
            url: "https://api.twitter.com/1.1/statuses/update.json".to_string(),
            query: pairs(&[("include_entities", "true")]),
            form: Some(pairs(&[(
                "status",
                "Hello Ladies + Gentlemen, a signed OAuth request!",
            )])),
            headers: Vec::new(),
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_sign_with_matches_reference_signature() {
        let signed = OAuth1Signer::default()
            .sign_with(
                &reference_token(),
                reference_request(),
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
                1_318_622_958,
            )
            .unwrap();

        let header = signed.header("Authorization").unwrap();
        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_signature="hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
        assert!(header.contains(r#"oauth_timestamp="1318622958""#));
        assert!(header.contains(r#"oauth_version="1.0""#));
    }

    #[test]
    fn test_signing_keeps_params_untouched() {
        let original = reference_request();
        let signed = OAuth1Signer::default()
            .sign(&reference_token(), original.clone())
            .unwrap();

        assert_eq!(signed.query, original.query);
        assert_eq!(signed.form, original.form);
        assert_eq!(signed.url, original.url);
        assert_eq!(signed.headers.len(), 1);
    }

    #[test]
    fn test_sha256_signer_reports_method() {
        let signed = OAuth1Signer::new(SignatureMethod::HmacSha256)
            .sign_with(&reference_token(), reference_request(), "nonce", 1)
            .unwrap();

        let header = signed.header("Authorization").unwrap();
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA256""#));
    }

    #[test]
    fn test_base_string_sorts_encoded_params() {
        let base = signature_base_string(
            HttpMethod::Get,
            "https://www.goodreads.com/owned_books/user",
            &pairs(&[("id", "6921131"), ("format", "xml"), ("a b", "c")]),
        );

        assert_eq!(
            base,
            "GET&https%3A%2F%2Fwww.goodreads.com%2Fowned_books%2Fuser&a%2520b%3Dc%26format%3Dxml%26id%3D6921131"
        );
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("HTTPS://WWW.Goodreads.com:443/api/auth_user?x=1").unwrap(),
            "https://www.goodreads.com/api/auth_user"
        );
        assert_eq!(
            normalize_url("http://127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080/"
        );
        assert_eq!(
            normalize_url("http://example.com:80/a#frag").unwrap(),
            "http://example.com/a"
        );
        assert!(normalize_url("/api/auth_user").is_err());
        assert!(normalize_url("ftp://example.com/").is_err());
        assert!(normalize_url("https:///path").is_err());
    }

    #[test]
    fn test_generated_nonces_are_alphanumeric_and_unique() {
        let a = generate_nonce();
        let b = generate_nonce();

        assert_eq!(a.len(), NONCE_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
