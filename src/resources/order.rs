//! Orders, their line items, and addresses.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, Customer, FulfillmentService, GetOptions, ListOptions, MetafieldService};

/// A customer's completed checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing)]
    pub total_price: Option<String>,
    #[serde(skip_serializing)]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,
    #[serde(skip_serializing)]
    pub total_discounts: Option<String>,
    #[serde(skip_serializing)]
    pub order_number: Option<i64>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    #[serde(skip_serializing)]
    pub cancel_reason: Option<String>,
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single product entry on an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A billing or shipping address on an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Optional payload for the cancel action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelOrderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: Order,
}

#[derive(Serialize)]
struct OrderRequest<'a> {
    order: &'a Order,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

/// Operations on the orders collection.
pub struct OrderService<'a> {
    client: &'a Client,
}

impl<'a> OrderService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/orders", self.client.path_prefix())
    }

    /// Lists orders.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Order>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: OrdersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.orders)
    }

    /// Counts orders.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single order by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Order, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: OrderEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.order)
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, order: &Order) -> Result<Order, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: OrderEnvelope =
            self.client.post(&path, Some(&OrderRequest { order })).await?;
        Ok(envelope.order)
    }

    /// Updates an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, order: &Order) -> Result<Order, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: OrderEnvelope =
            self.client.put(&path, Some(&OrderRequest { order })).await?;
        Ok(envelope.order)
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn close(&self, id: i64) -> Result<Order, Error> {
        let path = format!("{}/{id}/close.json", self.prefix());
        let envelope: OrderEnvelope = self.client.post::<_, ()>(&path, None).await?;
        Ok(envelope.order)
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn open(&self, id: i64) -> Result<Order, Error> {
        let path = format!("{}/{id}/open.json", self.prefix());
        let envelope: OrderEnvelope = self.client.post::<_, ()>(&path, None).await?;
        Ok(envelope.order)
    }

    /// Cancels an order, optionally with a reason and refund details.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn cancel(
        &self,
        id: i64,
        options: Option<&CancelOrderOptions>,
    ) -> Result<Order, Error> {
        let path = format!("{}/{id}/cancel.json", self.prefix());
        let envelope: OrderEnvelope = self.client.post(&path, options).await?;
        Ok(envelope.order)
    }

    /// Access the metafields owned by an order.
    #[must_use]
    pub const fn metafields(&self, order_id: i64) -> MetafieldService<'a> {
        MetafieldService::scoped(self.client, "orders", order_id)
    }

    /// Access the fulfillments of an order.
    #[must_use]
    pub const fn fulfillments(&self, order_id: i64) -> FulfillmentService<'a> {
        FulfillmentService::scoped(self.client, "orders", order_id)
    }
}
