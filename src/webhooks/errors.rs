//! Error types for webhook and callback signature verification.

use thiserror::Error;

/// Error returned when an HMAC signature check fails.
///
/// Each failure cause is a distinct variant so callers can tell a
/// misconfigured app (missing secret) from a forged or corrupted request
/// (mismatch, bad encoding). The boolean verification entry points collapse
/// all of these to `false`; use the verbose forms when the cause matters.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The API secret used as the HMAC key is empty.
    #[error("API secret is empty")]
    MissingSecret,

    /// No signature was provided (header or query parameter absent or empty).
    #[error("HMAC signature not provided")]
    MissingSignature,

    /// The provided signature is not valid base64.
    #[error("signature is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The provided signature is not valid hex.
    #[error("signature is not valid hex")]
    InvalidHex,

    /// The decoded signature is not the 32 bytes a SHA-256 MAC requires.
    #[error("decoded signature is {length} bytes, expected 32")]
    InvalidLength {
        /// The actual decoded length.
        length: usize,
    },

    /// The request body is empty.
    #[error("request body is empty")]
    EmptyBody,

    /// The computed MAC does not equal the provided signature.
    #[error("computed HMAC does not match the provided signature")]
    Mismatch,

    /// Reading the request body failed.
    #[error("failed to read request body: {0}")]
    Io(#[from] std::io::Error),
}
