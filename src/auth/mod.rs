//! OAuth authorization and HMAC signature primitives.
//!
//! The OAuth surface lives as methods on [`crate::App`]: building the
//! authorization URL, exchanging the callback code for an access token, and
//! verifying callback signatures. The signature helpers re-exported here are
//! the same primitives webhook verification uses, handy for constructing
//! signed fixtures in tests.

pub(crate) mod hmac;
mod oauth;

pub use hmac::{compute_signature, compute_signature_base64};
