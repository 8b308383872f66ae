//! HMAC-SHA256 signature computation and constant-time comparison.
//!
//! Shopify signs OAuth callbacks with a hex-encoded HMAC in the query string
//! and webhook deliveries with a base64-encoded HMAC in a request header.
//! Both use the app's API secret as the key. Comparisons go through a
//! fixed-time equality primitive so signature checks never short-circuit on
//! a data-dependent byte.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw HMAC-SHA256 of `message` keyed by `secret`.
pub(crate) fn compute_hmac(secret: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Computes the hex-encoded HMAC-SHA256 signature of `message`.
///
/// This is the encoding Shopify uses for OAuth callback signatures.
#[must_use]
pub fn compute_signature(secret: &[u8], message: &[u8]) -> String {
    hex::encode(&compute_hmac(secret, message))
}

/// Computes the base64-encoded HMAC-SHA256 signature of `message`.
///
/// This is the encoding Shopify uses for webhook signatures.
#[must_use]
pub fn compute_signature_base64(secret: &[u8], message: &[u8]) -> String {
    BASE64.encode(compute_hmac(secret, message))
}

/// Compares two byte slices in constant time.
///
/// Slices of differing length compare unequal; the length check is not
/// data-dependent on the slice contents.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Minimal hex encoding, enough for signature handling.
pub(crate) mod hex {
    const ALPHABET: &[u8; 16] = b"0123456789abcdef";

    pub(crate) fn encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            out.push(ALPHABET[(byte >> 4) as usize] as char);
            out.push(ALPHABET[(byte & 0x0f) as usize] as char);
        }
        out
    }

    pub(crate) fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };

        s.as_bytes()
            .chunks(2)
            .map(|pair| Some(nibble(pair[0])? << 4 | nibble(pair[1])?))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC-style vector: HMAC-SHA256 of "message" keyed by "key".
    const VECTOR_HEX: &str = "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a";
    const VECTOR_BASE64: &str = "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=";

    #[test]
    fn test_hex_signature_matches_known_vector() {
        assert_eq!(compute_signature(b"key", b"message"), VECTOR_HEX);
    }

    #[test]
    fn test_base64_signature_matches_known_vector() {
        assert_eq!(compute_signature_base64(b"key", b"message"), VECTOR_BASE64);
    }

    #[test]
    fn test_different_keys_produce_different_signatures() {
        assert_ne!(
            compute_signature(b"key1", b"message"),
            compute_signature(b"key2", b"message")
        );
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes = compute_hmac(b"key", b"message");
        let encoded = hex::encode(&bytes);
        assert_eq!(hex::decode(&encoded).unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_hex_decode_rejects_invalid_input() {
        assert!(hex::decode("abc").is_none()); // odd length
        assert!(hex::decode("zz").is_none()); // not hex
        assert_eq!(hex::decode("").unwrap(), Vec::<u8>::new());
    }
}
