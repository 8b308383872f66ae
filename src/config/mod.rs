//! Configuration types: app credentials, shop domains, and API versions.
//!
//! An [`App`] holds the immutable OAuth credentials of a Shopify app and is
//! shared by the authorization flow, webhook verification, and the REST
//! client. Shop identifiers are normalized through [`ShopDomain`], and the
//! versioned path prefix comes from [`ApiVersion`].

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiSecretKey, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Immutable OAuth app credentials.
///
/// Used both for building the authorization URL and for computing HMAC
/// signatures; construct once and share.
///
/// # Example
///
/// ```rust
/// use shopify_rest::App;
///
/// let app = App::builder()
///     .api_key("my-api-key")
///     .api_secret("my-api-secret")
///     .redirect_url("https://myapp.example.com/callback")
///     .scope("read_products,write_products")
///     .build()
///     .unwrap();
///
/// assert_eq!(app.api_key().as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug)]
pub struct App {
    api_key: ApiKey,
    api_secret: ApiSecretKey,
    redirect_url: String,
    scope: String,
}

impl App {
    /// Creates an app from its key and secret, with no redirect URL or scope.
    ///
    /// Sufficient for webhook verification; use [`App::builder`] when the
    /// OAuth authorization flow is needed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either credential is empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecretKey::new(api_secret)?,
            redirect_url: String::new(),
            scope: String::new(),
        })
    }

    /// Returns a builder for configuring all app fields.
    #[must_use]
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// The app's API key (OAuth client id).
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The app's API secret key (OAuth client secret and HMAC key).
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecretKey {
        &self.api_secret
    }

    /// The OAuth redirect URL registered for the app.
    #[must_use]
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// The comma-separated access scopes the app requests.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// Builder for [`App`].
#[derive(Debug, Default)]
pub struct AppBuilder {
    api_key: Option<String>,
    api_secret: Option<String>,
    redirect_url: Option<String>,
    scope: Option<String>,
}

impl AppBuilder {
    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Sets the OAuth redirect URL.
    #[must_use]
    pub fn redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    /// Sets the requested access scopes, comma-separated.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Builds the [`App`], validating credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the key or secret was
    /// never set, or a validation error if either is empty.
    pub fn build(self) -> Result<App, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self.api_secret.ok_or(ConfigError::MissingRequiredField {
            field: "api_secret",
        })?;

        Ok(App {
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecretKey::new(api_secret)?,
            redirect_url: self.redirect_url.unwrap_or_default(),
            scope: self.scope.unwrap_or_default(),
        })
    }
}
