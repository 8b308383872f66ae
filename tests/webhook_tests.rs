//! End-to-end webhook verification through the public API.

use std::io::Read;

use shopify_rest::{
    compute_signature_base64, verify_webhook, verify_webhook_reader, verify_webhook_verbose,
    App, VerificationError,
};

const SECRET: &str = "hush";

fn sign(body: &[u8]) -> String {
    compute_signature_base64(SECRET.as_bytes(), body)
}

#[test]
fn test_signed_delivery_round_trips() {
    let body = br#"{"id":788032119674292922,"topic":"orders/create"}"#;
    let signature = sign(body);

    assert!(verify_webhook(body, &signature, SECRET));
    assert!(verify_webhook_verbose(body, Some(&signature), SECRET).is_ok());
}

#[test]
fn test_modified_body_is_rejected() {
    let body = br#"{"id":1}"#;
    let signature = sign(body);

    assert!(!verify_webhook(br#"{"id":2}"#, &signature, SECRET));
    assert!(matches!(
        verify_webhook_verbose(br#"{"id":2}"#, Some(&signature), SECRET),
        Err(VerificationError::Mismatch)
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let body = br#"{"id":1}"#;
    let signature = sign(body);
    assert!(!verify_webhook(body, &signature, "different-secret"));
}

#[test]
fn test_missing_header_is_its_own_error() {
    assert!(matches!(
        verify_webhook_verbose(b"body", None, SECRET),
        Err(VerificationError::MissingSignature)
    ));
}

#[test]
fn test_reader_form_verifies_and_restores_the_body() {
    let body = br#"{"id":788032119674292922}"#;
    let signature = sign(body);

    let mut restored = verify_webhook_reader(&body[..], Some(&signature), SECRET).unwrap();
    let mut buffer = Vec::new();
    restored.read_to_end(&mut buffer).unwrap();
    assert_eq!(buffer, body);
}

#[test]
fn test_reader_form_rejects_bad_signature() {
    let body = br#"{"id":1}"#;
    let result = verify_webhook_reader(&body[..], Some(&sign(b"other")), SECRET);
    assert!(matches!(result, Err(VerificationError::Mismatch)));
}

#[test]
fn test_app_level_helpers_use_the_app_secret() {
    let app = App::new("key", SECRET).unwrap();
    let body = br#"{"id":1}"#;
    let signature = sign(body);

    assert!(app.verify_webhook(body, &signature));
    assert!(app.verify_webhook_verbose(body, Some(&signature)).is_ok());
    assert!(matches!(
        app.verify_webhook_verbose(body, None),
        Err(VerificationError::MissingSignature)
    ));
}
