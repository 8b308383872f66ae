//! Per-resource service objects for the Admin REST API.
//!
//! Each service is a thin declarative layer over the [`Client`] pipeline: a
//! path template plus envelope types per operation, nothing more. Services
//! borrow the client and are handed out by accessor methods
//! (`client.products()`, `client.orders()`, ...).
//!
//! Sub-resources shared by several parents (metafields, fulfillments) are
//! scoped by composition: the parent service hands out an instance bound to
//! `(parent resource, id)`, e.g.
//! `client.products().metafields(product_id).list(None)`.

mod application_charge;
mod asset;
mod blog;
mod collect;
mod customer;
mod customer_address;
mod discount_code;
mod draft_order;
mod fulfillment;
mod inventory_item;
mod location;
mod metafield;
mod order;
mod page;
mod product;
mod redirect;
mod shop;
mod transaction;
mod variant;

pub use application_charge::{ApplicationCharge, ApplicationChargeService};
pub use asset::{Asset, AssetService};
pub use blog::{Blog, BlogService};
pub use collect::{Collect, CollectService};
pub use customer::{Customer, CustomerSearchOptions, CustomerService};
pub use customer_address::{CustomerAddress, CustomerAddressService};
pub use discount_code::{DiscountCodeService, PriceRuleDiscountCode};
pub use draft_order::{DraftOrder, DraftOrderInvoice, DraftOrderService};
pub use fulfillment::{Fulfillment, FulfillmentService, Receipt};
pub use inventory_item::{InventoryItem, InventoryItemService};
pub use location::{Location, LocationService};
pub use metafield::{Metafield, MetafieldService};
pub use order::{Address, CancelOrderOptions, LineItem, Order, OrderService};
pub use page::{Page, PageService};
pub use product::{Product, ProductImage, ProductOption, ProductService};
pub use redirect::{Redirect, RedirectService};
pub use shop::{Shop, ShopService};
pub use transaction::{Transaction, TransactionService};
pub use variant::{Variant, VariantService};

use crate::client::Client;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// General-purpose options for list endpoints.
///
/// Not every resource honors every field; unknown parameters are ignored by
/// the platform.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOptions {
    /// Restrict results to the given ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict results to those created after the given id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<i64>,
    /// Lower bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Upper bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Lower bound on update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Upper bound on update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `created_at desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for count endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountOptions {
    /// Lower bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Upper bound on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Lower bound on update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Upper bound on update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Options for single-entity get endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetOptions {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl Client {
    /// Access the products collection.
    #[must_use]
    pub const fn products(&self) -> ProductService<'_> {
        ProductService::new(self)
    }

    /// Access product variants.
    #[must_use]
    pub const fn variants(&self) -> VariantService<'_> {
        VariantService::new(self)
    }

    /// Access the customers collection.
    #[must_use]
    pub const fn customers(&self) -> CustomerService<'_> {
        CustomerService::new(self)
    }

    /// Access customer addresses, scoped under their customers.
    #[must_use]
    pub const fn customer_addresses(&self) -> CustomerAddressService<'_> {
        CustomerAddressService::new(self)
    }

    /// Access theme assets, scoped under their themes.
    #[must_use]
    pub const fn assets(&self) -> AssetService<'_> {
        AssetService::new(self)
    }

    /// Access the orders collection.
    #[must_use]
    pub const fn orders(&self) -> OrderService<'_> {
        OrderService::new(self)
    }

    /// Access order transactions.
    #[must_use]
    pub const fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(self)
    }

    /// Access the pages collection.
    #[must_use]
    pub const fn pages(&self) -> PageService<'_> {
        PageService::new(self)
    }

    /// Access the blogs collection.
    #[must_use]
    pub const fn blogs(&self) -> BlogService<'_> {
        BlogService::new(self)
    }

    /// Access the shop's top-level metafields.
    ///
    /// Metafields owned by a specific resource are reached through that
    /// resource's service, e.g. `client.products().metafields(id)`.
    #[must_use]
    pub const fn metafields(&self) -> MetafieldService<'_> {
        MetafieldService::new(self)
    }

    /// Access fulfillments not scoped to an order.
    ///
    /// Order-scoped fulfillments are reached through
    /// `client.orders().fulfillments(order_id)`.
    #[must_use]
    pub const fn fulfillments(&self) -> FulfillmentService<'_> {
        FulfillmentService::new(self)
    }

    /// Access discount codes, scoped under their price rules.
    #[must_use]
    pub const fn discount_codes(&self) -> DiscountCodeService<'_> {
        DiscountCodeService::new(self)
    }

    /// Access the locations collection.
    #[must_use]
    pub const fn locations(&self) -> LocationService<'_> {
        LocationService::new(self)
    }

    /// Access the URL redirects collection.
    #[must_use]
    pub const fn redirects(&self) -> RedirectService<'_> {
        RedirectService::new(self)
    }

    /// Access the shop resource.
    #[must_use]
    pub const fn shop(&self) -> ShopService<'_> {
        ShopService::new(self)
    }

    /// Access one-time application charges.
    #[must_use]
    pub const fn application_charges(&self) -> ApplicationChargeService<'_> {
        ApplicationChargeService::new(self)
    }

    /// Access the collects (product/collection links) collection.
    #[must_use]
    pub const fn collects(&self) -> CollectService<'_> {
        CollectService::new(self)
    }

    /// Access the draft orders collection.
    #[must_use]
    pub const fn draft_orders(&self) -> DraftOrderService<'_> {
        DraftOrderService::new(self)
    }

    /// Access the inventory items collection.
    #[must_use]
    pub const fn inventory_items(&self) -> InventoryItemService<'_> {
        InventoryItemService::new(self)
    }
}
