//! OAuth authorization flow and signature checks for the [`App`] credentials.
//!
//! Covers the three-legged install handshake: build the authorization
//! redirect, exchange the callback code for an access token, and verify that
//! callbacks and webhooks were really signed by Shopify.

use crate::auth::hmac::{compute_hmac, constant_time_eq, hex};
use crate::client::Client;
use crate::config::{AccessToken, App, ShopDomain};
use crate::error::Error;
use crate::webhooks::{self, VerificationError};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

impl App {
    /// Builds the authorization URL the merchant is redirected to when
    /// installing the app.
    ///
    /// `state` is a caller-supplied nonce echoed back on the callback; the
    /// caller must validate it against CSRF. It is not persisted here.
    #[must_use]
    pub fn authorize_url(&self, shop: &ShopDomain, state: &str) -> String {
        format!(
            "https://{}/admin/oauth/authorize?client_id={}&redirect_uri={}&scope={}&state={}",
            shop.as_ref(),
            encode(self.api_key().as_ref()),
            encode(self.redirect_url()),
            encode(self.scope()),
            encode(state),
        )
    }

    /// Exchanges an authorization code for an Admin API access token.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors: [`Error::Transport`] on network failure,
    /// [`Error::Status`] when the platform rejects the code.
    pub async fn get_access_token(
        &self,
        shop: &ShopDomain,
        code: &str,
    ) -> Result<AccessToken, Error> {
        let client = Client::builder()
            .app(self.clone())
            .shop(shop.clone())
            .build()?;
        self.exchange_code(&client, code).await
    }

    /// Exchanges an authorization code using an existing client.
    ///
    /// Useful when the client carries a custom transport or base URL.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`App::get_access_token`].
    pub async fn exchange_code(&self, client: &Client, code: &str) -> Result<AccessToken, Error> {
        let request = AccessTokenRequest {
            client_id: self.api_key().as_ref(),
            client_secret: self.api_secret().as_ref(),
            code,
        };

        let response: AccessTokenResponse = client
            .post("admin/oauth/access_token", Some(&request))
            .await?;
        Ok(AccessToken::new(response.access_token)?)
    }

    /// Verifies a message against a hex-encoded HMAC signature.
    ///
    /// This is the primitive behind [`App::verify_callback`]; the comparison
    /// is constant-time.
    #[must_use]
    pub fn verify_message(&self, message: &str, signature: &str) -> bool {
        // Decode before comparing so casing differences in the hex cannot matter.
        let Some(provided) = hex::decode(signature) else {
            return false;
        };
        let computed = compute_hmac(self.api_secret().as_ref().as_bytes(), message.as_bytes());
        constant_time_eq(&computed, &provided)
    }

    /// Verifies the signature of an OAuth callback URL.
    ///
    /// The signed message is the query string with the `hmac` and `signature`
    /// parameters removed, percent-decoded, and re-joined with keys in sorted
    /// order; the signature is the hex `hmac` parameter.
    #[must_use]
    pub fn verify_callback(&self, url: &Url) -> bool {
        self.verify_callback_verbose(url).is_ok()
    }

    /// Verifies an OAuth callback URL, reporting the exact failure cause.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::MissingSignature`] when the `hmac`
    /// parameter is absent or empty, [`VerificationError::InvalidHex`] or
    /// [`VerificationError::InvalidLength`] for a malformed signature, and
    /// [`VerificationError::Mismatch`] when the MAC does not match.
    pub fn verify_callback_verbose(&self, url: &Url) -> Result<(), VerificationError> {
        let signature = url
            .query_pairs()
            .find(|(key, _)| key == "hmac")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or(VerificationError::MissingSignature)?;

        let provided = hex::decode(&signature).ok_or(VerificationError::InvalidHex)?;
        if provided.len() != 32 {
            return Err(VerificationError::InvalidLength {
                length: provided.len(),
            });
        }

        let message = canonical_query(url);
        let computed =
            compute_hmac(self.api_secret().as_ref().as_bytes(), message.as_bytes());

        if constant_time_eq(&computed, &provided) {
            Ok(())
        } else {
            Err(VerificationError::Mismatch)
        }
    }

    /// Verifies a webhook body against its signature header value.
    ///
    /// Convenience wrapper over [`webhooks::verify_webhook`] using this
    /// app's secret.
    #[must_use]
    pub fn verify_webhook(&self, body: &[u8], signature: &str) -> bool {
        webhooks::verify_webhook(body, signature, self.api_secret().as_ref())
    }

    /// Verifies a webhook body, reporting the exact failure cause.
    ///
    /// # Errors
    ///
    /// Same as [`webhooks::verify_webhook_verbose`].
    pub fn verify_webhook_verbose(
        &self,
        body: &[u8],
        signature: Option<&str>,
    ) -> Result<(), VerificationError> {
        webhooks::verify_webhook_verbose(body, signature, self.api_secret().as_ref())
    }
}

// The signed form of a callback query: every pair except `hmac` and
// `signature`, percent-decoded, sorted by key, re-joined as `k=v&k=v`.
fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "hmac" && key != "signature")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut message = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            message.push('&');
        }
        message.push_str(key);
        message.push('=');
        message.push_str(value);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hmac::compute_signature;

    fn test_app() -> App {
        App::builder()
            .api_key("test-api-key")
            .api_secret("test-api-secret")
            .redirect_url("https://myapp.example.com/callback")
            .scope("read_products")
            .build()
            .unwrap()
    }

    fn signed_callback_url(app: &App, query: &str) -> Url {
        let url = Url::parse(&format!("https://example.com/callback?{query}")).unwrap();
        let signature = compute_signature(
            app.api_secret().as_ref().as_bytes(),
            canonical_query(&url).as_bytes(),
        );
        Url::parse(&format!(
            "https://example.com/callback?{query}&hmac={signature}"
        ))
        .unwrap()
    }

    #[test]
    fn test_authorize_url_contains_all_parameters() {
        let app = test_app();
        let shop = ShopDomain::new("fooshop").unwrap();
        let url = app.authorize_url(&shop, "nonce-1");

        assert_eq!(
            url,
            "https://fooshop.myshopify.com/admin/oauth/authorize\
             ?client_id=test-api-key\
             &redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback\
             &scope=read_products\
             &state=nonce-1"
        );
    }

    #[test]
    fn test_verify_message_with_known_vector() {
        let app = App::new("key-id", "key").unwrap();
        // HMAC-SHA256 of "message" keyed by "key".
        assert!(app.verify_message(
            "message",
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        ));
        assert!(!app.verify_message("tampered", "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"));
    }

    #[test]
    fn test_valid_callback_verifies() {
        let app = test_app();
        let url = signed_callback_url(&app, "code=abc123&shop=fooshop.myshopify.com&state=nonce");
        assert!(app.verify_callback(&url));
    }

    #[test]
    fn test_callback_query_is_sorted_before_signing() {
        let app = test_app();
        // Parameters deliberately out of order; the canonical form sorts them.
        let url = signed_callback_url(&app, "state=nonce&code=abc123&shop=fooshop.myshopify.com");
        assert!(app.verify_callback(&url));
    }

    #[test]
    fn test_tampered_callback_parameter_fails() {
        let app = test_app();
        let url = signed_callback_url(&app, "code=abc123&shop=fooshop.myshopify.com");
        let tampered = Url::parse(
            &url.as_str()
                .replace("shop=fooshop.myshopify.com", "shop=evil.myshopify.com"),
        )
        .unwrap();
        assert!(!app.verify_callback(&tampered));
        assert!(matches!(
            app.verify_callback_verbose(&tampered),
            Err(VerificationError::Mismatch)
        ));
    }

    #[test]
    fn test_signature_parameter_is_excluded_from_message() {
        let app = test_app();
        let url = signed_callback_url(&app, "code=abc123&signature=legacy-ignored");
        assert!(app.verify_callback(&url));
    }

    #[test]
    fn test_callback_missing_hmac_fails() {
        let app = test_app();
        let url = Url::parse("https://example.com/callback?code=abc123").unwrap();
        assert!(!app.verify_callback(&url));
        assert!(matches!(
            app.verify_callback_verbose(&url),
            Err(VerificationError::MissingSignature)
        ));
    }

    #[test]
    fn test_callback_malformed_hmac_fails() {
        let app = test_app();
        let url = Url::parse("https://example.com/callback?code=abc&hmac=zzzz").unwrap();
        assert!(matches!(
            app.verify_callback_verbose(&url),
            Err(VerificationError::InvalidHex)
        ));

        let url = Url::parse("https://example.com/callback?code=abc&hmac=deadbeef").unwrap();
        assert!(matches!(
            app.verify_callback_verbose(&url),
            Err(VerificationError::InvalidLength { length: 4 })
        ));
    }

    #[test]
    fn test_canonical_query_percent_decodes() {
        let url = Url::parse(
            "https://example.com/cb?redirect_uri=https%3A%2F%2Fapp%2Fcb&code=x&hmac=aa",
        )
        .unwrap();
        assert_eq!(canonical_query(&url), "code=x&redirect_uri=https://app/cb");
    }
}
