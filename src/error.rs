//! Error types for the Shopify REST client.
//!
//! Failures are split by layer so callers can tell a rejected request from a
//! malformed response:
//!
//! - [`Error::Transport`]: network-level failure (DNS, connect, timeout)
//! - [`Error::Status`]: a non-2xx HTTP response from the API
//! - [`Error::Decoding`]: a response body that does not match the expected
//!   JSON shape
//! - [`Error::Config`]: invalid or missing configuration values
//! - [`Error::Verification`]: an HMAC signature check failure
//!
//! This layer performs no retries and no backoff; every error surfaces to the
//! immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::Error;
//!
//! match client.products().get(123, None).await {
//!     Ok(product) => println!("{:?}", product.title),
//!     Err(Error::Status(e)) if e.status == 404 => println!("no such product"),
//!     Err(Error::Status(e)) => println!("API rejected the request: {e}"),
//!     Err(Error::Decoding(e)) => println!("unexpected response shape: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use crate::client::CallLimit;
use crate::webhooks::VerificationError;
use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection error, propagated unchanged from the transport.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API returned a non-successful status code.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The response body did not match the expected JSON shape.
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// Configuration was invalid or incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HMAC signature check failed.
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

/// Error returned when the API responds with a non-2xx status code.
///
/// Carries the decoded platform error body when one was present, the request
/// id for support correspondence, and the rate-limit state reported alongside
/// the response.
#[derive(Debug, Error)]
#[error("HTTP {status}: {}", self.message())]
pub struct StatusError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// Decoded `errors` (or `error`) payload from the response body, if any.
    pub errors: Option<serde_json::Value>,
    /// Value of the `X-Request-Id` header, if present.
    pub request_id: Option<String>,
    /// Parsed `X-Shopify-Shop-Api-Call-Limit` header, if present.
    pub call_limit: Option<CallLimit>,
    /// Parsed `Retry-After` header in seconds, if present.
    pub retry_after: Option<f64>,
}

impl StatusError {
    fn message(&self) -> String {
        self.errors
            .as_ref()
            .map_or_else(|| "no error body".to_string(), ToString::to_string)
    }
}

/// Error returned when a response body cannot be decoded into the expected
/// envelope type.
#[derive(Debug, Error)]
#[error("failed to decode response from {path}: {source}")]
pub struct DecodingError {
    /// The request path whose response failed to decode.
    pub path: String,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when configuration values fail validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API key was empty.
    #[error("API key cannot be empty")]
    EmptyApiKey,

    /// The API secret key was empty.
    #[error("API secret key cannot be empty")]
    EmptyApiSecretKey,

    /// The access token was empty.
    #[error("access token cannot be empty")]
    EmptyAccessToken,

    /// The shop domain could not be normalized to `<shop>.myshopify.com`.
    #[error("invalid shop domain: {domain}")]
    InvalidShopDomain {
        /// The rejected domain value.
        domain: String,
    },

    /// The API version string was not recognized.
    #[error("invalid API version: {version}")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// A builder was finalized without a required field.
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Name of the absent field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_includes_status_and_body() {
        let error = StatusError {
            status: 422,
            errors: Some(serde_json::json!({"title": ["can't be blank"]})),
            request_id: None,
            call_limit: None,
            retry_after: None,
        };
        let message = error.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("title"));
    }

    #[test]
    fn test_status_error_display_without_body() {
        let error = StatusError {
            status: 500,
            errors: None,
            request_id: Some("abc-123".to_string()),
            call_limit: None,
            retry_after: None,
        };
        assert_eq!(error.to_string(), "HTTP 500: no error body");
    }

    #[test]
    fn test_decoding_error_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = DecodingError {
            path: "admin/api/2025-07/products.json".to_string(),
            source,
        };
        assert!(error.to_string().contains("products.json"));
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::MissingRequiredField { field: "shop" }.to_string(),
            "missing required field: shop"
        );
        assert_eq!(ConfigError::EmptyApiKey.to_string(), "API key cannot be empty");
    }
}
