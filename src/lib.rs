//! A typed Rust client for the Shopify Admin REST API.
//!
//! The crate is built around two independent pieces:
//!
//! - A request/response pipeline ([`Client`]) bound to one shop, one set of
//!   app credentials, and one API version. Per-resource services
//!   (`client.products()`, `client.orders()`, ...) are thin declarative
//!   layers over it: path templates plus envelope types.
//! - OAuth and webhook authentication ([`App`] and the [`webhooks`] module):
//!   building the authorization URL, exchanging the callback code for an
//!   access token, and verifying HMAC-signed callbacks and webhook
//!   deliveries with constant-time comparisons.
//!
//! # Getting Started
//!
//! ```rust,no_run
//! use shopify_rest::{AccessToken, App, Client, ShopDomain};
//!
//! # async fn example() -> Result<(), shopify_rest::Error> {
//! let app = App::builder()
//!     .api_key("my-api-key")
//!     .api_secret("my-api-secret")
//!     .redirect_url("https://myapp.example.com/callback")
//!     .scope("read_products,write_products")
//!     .build()?;
//!
//! let shop = ShopDomain::new("my-store")?;
//! let token = AccessToken::new("shpat_access_token")?;
//! let client = Client::new(app, &shop, Some(token))?;
//!
//! let products = client.products().list(None).await?;
//! for product in products {
//!     println!("{:?}", product.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # OAuth Flow
//!
//! ```rust,no_run
//! use shopify_rest::{App, ShopDomain};
//!
//! # async fn example(app: App) -> Result<(), shopify_rest::Error> {
//! let shop = ShopDomain::new("my-store")?;
//!
//! // 1. Redirect the merchant here; validate `state` on the way back.
//! let url = app.authorize_url(&shop, "random-state-nonce");
//!
//! // 2. On the callback, verify the signature, then trade the code in.
//! # let callback_url = reqwest::Url::parse("https://x.example/cb").unwrap();
//! # let code = "";
//! if app.verify_callback(&callback_url) {
//!     let token = app.get_access_token(&shop, code).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod webhooks;

pub use auth::{compute_signature, compute_signature_base64};
pub use client::{CallLimit, Client, ClientBuilder};
pub use config::{AccessToken, ApiKey, ApiSecretKey, ApiVersion, App, AppBuilder, ShopDomain};
pub use error::{ConfigError, DecodingError, Error, StatusError};
pub use resources::{
    Address, ApplicationCharge, ApplicationChargeService, Asset, AssetService, Blog, BlogService,
    CancelOrderOptions, Collect, CollectService, CountOptions, Customer, CustomerAddress,
    CustomerAddressService, CustomerSearchOptions, CustomerService, DiscountCodeService,
    DraftOrder, DraftOrderInvoice, DraftOrderService, Fulfillment, FulfillmentService, GetOptions,
    InventoryItem, InventoryItemService, LineItem, ListOptions, Location, LocationService,
    Metafield, MetafieldService, Order, OrderService, Page, PageService, PriceRuleDiscountCode,
    Product, ProductImage, ProductOption, ProductService, Receipt, Redirect, RedirectService,
    Shop, ShopService, Transaction, TransactionService, Variant, VariantService,
};
pub use webhooks::{
    verify_webhook, verify_webhook_reader, verify_webhook_verbose, VerificationError,
    WEBHOOK_HMAC_HEADER,
};

// The client is shared across tasks; keep it Send + Sync.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
    assert_send_sync::<App>();
    assert_send_sync::<Error>();
};
