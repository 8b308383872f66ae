//! The shared HTTP request/response pipeline.
//!
//! Every resource service funnels through one [`Client`]: it owns the shop's
//! base URL, the versioned path prefix, and the access token, and exposes
//! exactly five operations ([`Client::get`], [`Client::post`],
//! [`Client::put`], [`Client::delete`], [`Client::count`]) plus the two
//! path-prefix helpers for owner-scoped sub-resources. Resource services
//! supply path templates and envelope types; wire behavior lives here.
//!
//! The pipeline performs no retries and holds no mutable state; the
//! underlying connection pool is safe to share across tasks.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopify_rest::{App, Client, ShopDomain, AccessToken};
//!
//! # async fn example() -> Result<(), shopify_rest::Error> {
//! let app = App::new("api-key", "api-secret")?;
//! let shop = ShopDomain::new("my-store")?;
//! let token = AccessToken::new("shpat_token")?;
//!
//! let client = Client::new(app, &shop, Some(token))?;
//! let count = client.products().count(None).await?;
//! println!("{count} products");
//! # Ok(())
//! # }
//! ```

mod limits;
mod params;

pub use limits::CallLimit;

pub(crate) use params::serialize_to_query;

use crate::config::{AccessToken, ApiVersion, App, ShopDomain};
use crate::error::{DecodingError, Error, StatusError};
use reqwest::header::{self, HeaderMap};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

const USER_AGENT: &str = concat!("shopify-rest/", env!("CARGO_PKG_VERSION"));

/// A client bound to one shop, one set of app credentials, and one API
/// version.
///
/// Cheap to clone; the transport's connection pool is shared between clones.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    app: App,
    base_url: String,
    path_prefix: String,
    token: Option<AccessToken>,
}

impl Client {
    /// Creates a client for `shop` using the latest stable API version.
    ///
    /// Pass `None` for `token` before the OAuth exchange has produced one
    /// (the token endpoint itself is unauthenticated).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(app: App, shop: &ShopDomain, token: Option<AccessToken>) -> Result<Self, Error> {
        let mut builder = Self::builder().app(app).shop(shop.clone());
        if let Some(token) = token {
            builder = builder.token(token);
        }
        builder.build()
    }

    /// Returns a builder for configuring the API version, transport, or base
    /// URL override.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The app credentials this client was built with.
    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// The versioned path prefix, e.g. `admin/api/2025-07`.
    ///
    /// Fixed for the life of the client.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// The scheme-and-host every request is issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET and decodes the response into `T`.
    ///
    /// `params` is any `Serialize` struct flattened to query parameters;
    /// `None` fields are skipped and arrays join with commas.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on network failure, [`Error::Status`] on a
    /// non-2xx response, [`Error::Decoding`] when the body does not match
    /// `T`.
    pub async fn get<T, P>(&self, path: &str, params: Option<&P>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let mut request = self.request(Method::GET, path);
        if let Some(params) = params {
            request = request.query(&encode_params(path, params)?);
        }
        let body = self.execute(request, path).await?;
        decode(path, &body)
    }

    /// Issues a POST with an optional JSON body and decodes the response.
    ///
    /// A `None` body sends an empty payload, used by action endpoints such
    /// as activate or complete.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::get`].
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let body = self.execute(request, path).await?;
        decode(path, &body)
    }

    /// Issues a PUT with an optional JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::get`].
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::PUT, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let body = self.execute(request, path).await?;
        decode(path, &body)
    }

    /// Issues a DELETE, discarding the response body.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] on network failure, [`Error::Status`] on a
    /// non-2xx response.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.request(Method::DELETE, path);
        self.execute(request, path).await?;
        Ok(())
    }

    /// Issues a GET against a `count.json`-style path and returns the
    /// integer from the `{"count": N}` envelope.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Client::get`]; a body without a `count` key
    /// is a decoding error.
    pub async fn count<P>(&self, path: &str, params: Option<&P>) -> Result<i64, Error>
    where
        P: Serialize + ?Sized,
    {
        let envelope: CountEnvelope = self.get(path, params).await?;
        Ok(envelope.count)
    }

    /// Builds the path prefix for metafields owned by `owner`.
    ///
    /// `None` addresses the shop's top-level metafields
    /// (`<prefix>/metafields`); `Some(("products", 42))` addresses
    /// `<prefix>/products/42/metafields`.
    #[must_use]
    pub fn metafield_path_prefix(&self, owner: Option<(&str, i64)>) -> String {
        self.scoped_path_prefix("metafields", owner)
    }

    /// Builds the path prefix for fulfillments owned by `owner`.
    ///
    /// Same shape as [`Client::metafield_path_prefix`].
    #[must_use]
    pub fn fulfillment_path_prefix(&self, owner: Option<(&str, i64)>) -> String {
        self.scoped_path_prefix("fulfillments", owner)
    }

    fn scoped_path_prefix(&self, collection: &str, owner: Option<(&str, i64)>) -> String {
        match owner {
            None => format!("{}/{collection}", self.path_prefix),
            Some((resource, id)) => format!("{}/{resource}/{id}/{collection}", self.path_prefix),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT);

        if let Some(token) = &self.token {
            builder = builder.header(ACCESS_TOKEN_HEADER, token.as_ref());
        }
        builder
    }

    async fn execute(&self, request: reqwest::RequestBuilder, path: &str) -> Result<String, Error> {
        let response = request.send().await?;
        let status = response.status();
        let call_limit = CallLimit::from_headers(response.headers());
        let request_id = header_str(response.headers(), "x-request-id");
        let retry_after =
            header_str(response.headers(), "retry-after").and_then(|value| value.parse().ok());

        if let Some(limit) = call_limit {
            tracing::debug!(
                used = limit.used,
                max = limit.max,
                path,
                "API call limit reported"
            );
        }

        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        tracing::warn!(status = status.as_u16(), path, "API request failed");
        Err(StatusError {
            status: status.as_u16(),
            errors: parse_error_body(&body),
            request_id,
            call_limit,
            retry_after,
        }
        .into())
    }
}

#[derive(Deserialize)]
struct CountEnvelope {
    count: i64,
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|source| {
        DecodingError {
            path: path.to_string(),
            source,
        }
        .into()
    })
}

fn encode_params<P>(path: &str, params: &P) -> Result<Vec<(String, String)>, Error>
where
    P: Serialize + ?Sized,
{
    serialize_to_query(params).map_err(|source| {
        DecodingError {
            path: format!("query parameters for {path}"),
            source,
        }
        .into()
    })
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

// The platform reports failures as `{"errors": ...}` (object, array, or
// string) or occasionally `{"error": "..."}`.
fn parse_error_body(body: &str) -> Option<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("errors")
        .or_else(|| value.get("error"))
        .cloned()
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    app: Option<App>,
    shop: Option<ShopDomain>,
    token: Option<AccessToken>,
    version: Option<ApiVersion>,
    base_url: Option<String>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Sets the app credentials (required).
    #[must_use]
    pub fn app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }

    /// Sets the shop the client is bound to (required unless a base URL
    /// override is given).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the Admin API access token.
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version. Defaults to [`ApiVersion::latest`].
    #[must_use]
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Overrides the scheme-and-host requests are issued against.
    ///
    /// Intended for tests and proxies; the shop's own URL is used otherwise.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supplies a preconfigured transport instead of the default.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::MissingRequiredField`] when `app`, or
    /// both `shop` and `base_url`, are absent; [`Error::Transport`] if the
    /// default transport cannot be constructed.
    pub fn build(self) -> Result<Client, Error> {
        let app = self
            .app
            .ok_or(crate::error::ConfigError::MissingRequiredField { field: "app" })?;

        let base_url = match (self.base_url, self.shop) {
            (Some(url), _) => url.trim_end_matches('/').to_string(),
            (None, Some(shop)) => shop.base_url(),
            (None, None) => {
                return Err(crate::error::ConfigError::MissingRequiredField { field: "shop" }.into())
            }
        };

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().use_rustls_tls().build()?,
        };

        Ok(Client {
            http,
            app,
            base_url,
            path_prefix: self.version.unwrap_or_default().path_prefix(),
            token: self.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn test_client() -> Client {
        Client::builder()
            .app(App::new("key", "secret").unwrap())
            .shop(ShopDomain::new("fooshop").unwrap())
            .version(ApiVersion::V2024_07)
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_url_comes_from_shop_domain() {
        let client = test_client();
        assert_eq!(client.base_url(), "https://fooshop.myshopify.com");
        assert_eq!(client.path_prefix(), "admin/api/2024-07");
    }

    #[test]
    fn test_builder_requires_app_and_shop() {
        let result = Client::builder()
            .shop(ShopDomain::new("fooshop").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingRequiredField {
                field: "app"
            }))
        ));

        let result = Client::builder().app(App::new("key", "secret").unwrap()).build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingRequiredField {
                field: "shop"
            }))
        ));
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = Client::builder()
            .app(App::new("key", "secret").unwrap())
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_metafield_path_prefix() {
        let client = test_client();
        assert_eq!(
            client.metafield_path_prefix(None),
            "admin/api/2024-07/metafields"
        );
        assert_eq!(
            client.metafield_path_prefix(Some(("products", 42))),
            "admin/api/2024-07/products/42/metafields"
        );
    }

    #[test]
    fn test_fulfillment_path_prefix() {
        let client = test_client();
        assert_eq!(
            client.fulfillment_path_prefix(None),
            "admin/api/2024-07/fulfillments"
        );
        assert_eq!(
            client.fulfillment_path_prefix(Some(("orders", 450789469))),
            "admin/api/2024-07/orders/450789469/fulfillments"
        );
    }

    #[test]
    fn test_parse_error_body_shapes() {
        assert_eq!(
            parse_error_body(r#"{"errors":"Not Found"}"#),
            Some(serde_json::json!("Not Found"))
        );
        assert_eq!(
            parse_error_body(r#"{"errors":{"title":["can't be blank"]}}"#),
            Some(serde_json::json!({"title": ["can't be blank"]}))
        );
        assert_eq!(
            parse_error_body(r#"{"error":"invalid_request"}"#),
            Some(serde_json::json!("invalid_request"))
        );
        assert_eq!(parse_error_body("not json"), None);
        assert_eq!(parse_error_body(r#"{"other":1}"#), None);
    }
}
