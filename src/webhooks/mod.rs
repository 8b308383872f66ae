//! Webhook signature verification.
//!
//! Inbound webhook requests from Shopify carry a base64 HMAC-SHA256
//! signature of the raw body in the [`WEBHOOK_HMAC_HEADER`] header. This
//! module verifies those signatures without consuming the body from the
//! caller's point of view.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::webhooks::verify_webhook;
//!
//! # let (body, header_value) = (b"".as_slice(), "");
//! // body: raw request bytes; header_value: the WEBHOOK_HMAC_HEADER value
//! if verify_webhook(body, header_value, "app-secret") {
//!     // authentic webhook, safe to process
//! }
//! ```

mod errors;
mod verification;

pub use errors::VerificationError;
pub use verification::{
    verify_webhook, verify_webhook_reader, verify_webhook_verbose, WEBHOOK_HMAC_HEADER,
};
