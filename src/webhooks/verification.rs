//! Webhook HMAC verification.
//!
//! Shopify signs every webhook delivery by putting
//! base64(HMAC-SHA256(secret, raw body)) in the
//! [`WEBHOOK_HMAC_HEADER`] header. Verification must run over the exact raw
//! body bytes, before any parsing, and must not consume the body from the
//! caller's point of view.

use crate::auth::hmac::{compute_hmac, constant_time_eq};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::io::{Cursor, Read};

use super::VerificationError;

/// Header carrying the base64-encoded HMAC-SHA256 signature of the body.
pub const WEBHOOK_HMAC_HEADER: &str = "X-Shopify-Hmac-Sha256";

/// Verifies a webhook body against its signature header value.
///
/// Returns `true` only when `signature` is valid base64 decoding to exactly
/// the MAC of `body` keyed by `secret`. Any malformed input yields `false`;
/// use [`verify_webhook_verbose`] to learn why a check failed.
#[must_use]
pub fn verify_webhook(body: &[u8], signature: &str, secret: &str) -> bool {
    verify_webhook_verbose(body, Some(signature), secret).is_ok()
}

/// Verifies a webhook body, reporting the exact failure cause.
///
/// Pass `None` for `signature` when the header was absent. Checks run in a
/// fixed order: secret present, signature present, signature well-formed
/// (base64, 32 bytes decoded), body non-empty, then the constant-time MAC
/// comparison.
///
/// # Errors
///
/// Returns the [`VerificationError`] variant matching the first failed check.
pub fn verify_webhook_verbose(
    body: &[u8],
    signature: Option<&str>,
    secret: &str,
) -> Result<(), VerificationError> {
    if secret.is_empty() {
        return Err(VerificationError::MissingSecret);
    }

    let signature = match signature {
        Some(s) if !s.is_empty() => s,
        _ => return Err(VerificationError::MissingSignature),
    };

    let provided = BASE64.decode(signature)?;
    if provided.len() != 32 {
        return Err(VerificationError::InvalidLength {
            length: provided.len(),
        });
    }

    if body.is_empty() {
        return Err(VerificationError::EmptyBody);
    }

    let computed = compute_hmac(secret.as_bytes(), body);
    if constant_time_eq(&computed, &provided) {
        Ok(())
    } else {
        Err(VerificationError::Mismatch)
    }
}

/// Verifies a webhook whose body is behind a reader, returning a fresh
/// readable body on success.
///
/// Hashing requires consuming the body, so this captures the bytes, runs the
/// verbose check, and hands back a cursor over the exact original bytes for
/// downstream consumers to re-read.
///
/// # Errors
///
/// Returns [`VerificationError::Io`] if reading fails, otherwise the same
/// errors as [`verify_webhook_verbose`].
pub fn verify_webhook_reader<R: Read>(
    mut body: R,
    signature: Option<&str>,
    secret: &str,
) -> Result<Cursor<Vec<u8>>, VerificationError> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;

    verify_webhook_verbose(&buf, signature, secret)?;
    Ok(Cursor::new(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hmac::compute_signature_base64;

    const SECRET: &str = "hush";
    const BODY: &[u8] = br#"{"id":123456,"topic":"orders/create"}"#;

    fn sign(body: &[u8]) -> String {
        compute_signature_base64(SECRET.as_bytes(), body)
    }

    #[test]
    fn test_valid_signature_verifies() {
        let signature = sign(BODY);
        assert!(verify_webhook(BODY, &signature, SECRET));
        assert!(verify_webhook_verbose(BODY, Some(&signature), SECRET).is_ok());
    }

    #[test]
    fn test_known_vector_verifies() {
        // HMAC-SHA256 of "message" keyed by "key".
        assert!(verify_webhook(
            b"message",
            "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=",
            "key"
        ));
    }

    #[test]
    fn test_tampered_body_fails() {
        let signature = sign(BODY);
        let mut tampered = BODY.to_vec();
        tampered[0] ^= 0x01; // single bit flip
        assert!(!verify_webhook(&tampered, &signature, SECRET));
    }

    #[test]
    fn test_tampered_signature_fails() {
        let valid = sign(BODY);
        let forged = compute_signature_base64(SECRET.as_bytes(), b"other body");
        assert_ne!(valid, forged);
        assert!(matches!(
            verify_webhook_verbose(BODY, Some(&forged), SECRET),
            Err(VerificationError::Mismatch)
        ));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let signature = sign(BODY);
        assert!(!verify_webhook(BODY, &signature, "other-secret"));
    }

    #[test]
    fn test_verbose_distinguishes_missing_secret() {
        assert!(matches!(
            verify_webhook_verbose(BODY, Some(&sign(BODY)), ""),
            Err(VerificationError::MissingSecret)
        ));
    }

    #[test]
    fn test_verbose_distinguishes_missing_signature() {
        assert!(matches!(
            verify_webhook_verbose(BODY, None, SECRET),
            Err(VerificationError::MissingSignature)
        ));
        assert!(matches!(
            verify_webhook_verbose(BODY, Some(""), SECRET),
            Err(VerificationError::MissingSignature)
        ));
    }

    #[test]
    fn test_verbose_distinguishes_malformed_base64() {
        assert!(matches!(
            verify_webhook_verbose(BODY, Some("not base64!!"), SECRET),
            Err(VerificationError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_verbose_distinguishes_wrong_length() {
        let short = BASE64.encode(b"too short");
        assert!(matches!(
            verify_webhook_verbose(BODY, Some(&short), SECRET),
            Err(VerificationError::InvalidLength { length: 9 })
        ));
    }

    #[test]
    fn test_verbose_distinguishes_empty_body() {
        let signature = sign(b"anything");
        assert!(matches!(
            verify_webhook_verbose(b"", Some(&signature), SECRET),
            Err(VerificationError::EmptyBody)
        ));
    }

    #[test]
    fn test_reader_verification_restores_body() {
        let signature = sign(BODY);
        let mut restored = verify_webhook_reader(BODY, Some(&signature), SECRET).unwrap();

        let mut buf = Vec::new();
        restored.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, BODY);
    }

    #[test]
    fn test_reader_verification_rejects_bad_signature() {
        let forged = sign(b"other");
        assert!(verify_webhook_reader(BODY, Some(&forged), SECRET).is_err());
    }
}
