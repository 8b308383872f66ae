//! Draft orders.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Address, CountOptions, Customer, GetOptions, LineItem, ListOptions, MetafieldService};

/// An order created on a customer's behalf, completed into a real order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub order_id: Option<i64>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing)]
    pub invoice_sent_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub invoice_url: Option<String>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,
    #[serde(skip_serializing)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Invoice details for [`DraftOrderService::send_invoice`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftOrderInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct DraftOrderEnvelope {
    draft_order: DraftOrder,
}

#[derive(Serialize)]
struct DraftOrderRequest<'a> {
    draft_order: &'a DraftOrder,
}

#[derive(Deserialize)]
struct DraftOrdersEnvelope {
    draft_orders: Vec<DraftOrder>,
}

#[derive(Serialize, Deserialize)]
struct DraftOrderInvoiceEnvelope {
    draft_order_invoice: DraftOrderInvoice,
}

/// Operations on the draft orders collection.
pub struct DraftOrderService<'a> {
    client: &'a Client,
}

impl<'a> DraftOrderService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/draft_orders", self.client.path_prefix())
    }

    /// Lists draft orders.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<DraftOrder>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: DraftOrdersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.draft_orders)
    }

    /// Counts draft orders.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single draft order by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<DraftOrder, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: DraftOrderEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.draft_order)
    }

    /// Creates a draft order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, draft_order: &DraftOrder) -> Result<DraftOrder, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: DraftOrderEnvelope = self
            .client
            .post(&path, Some(&DraftOrderRequest { draft_order }))
            .await?;
        Ok(envelope.draft_order)
    }

    /// Updates a draft order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, draft_order: &DraftOrder) -> Result<DraftOrder, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: DraftOrderEnvelope = self
            .client
            .put(&path, Some(&DraftOrderRequest { draft_order }))
            .await?;
        Ok(envelope.draft_order)
    }

    /// Deletes a draft order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }

    /// Emails the invoice for a draft order to the customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn send_invoice(
        &self,
        id: i64,
        invoice: &DraftOrderInvoice,
    ) -> Result<DraftOrderInvoice, Error> {
        let path = format!("{}/{id}/send_invoice.json", self.prefix());
        let envelope: DraftOrderInvoiceEnvelope = self
            .client
            .post(
                &path,
                Some(&DraftOrderInvoiceEnvelope {
                    draft_order_invoice: invoice.clone(),
                }),
            )
            .await?;
        Ok(envelope.draft_order_invoice)
    }

    /// Completes a draft order, turning it into a real order.
    ///
    /// With `payment_pending` the resulting order is marked pending instead
    /// of paid.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn complete(&self, id: i64, payment_pending: bool) -> Result<DraftOrder, Error> {
        let path = format!(
            "{}/{id}/complete.json?payment_pending={payment_pending}",
            self.prefix()
        );
        let envelope: DraftOrderEnvelope = self.client.put::<_, ()>(&path, None).await?;
        Ok(envelope.draft_order)
    }

    /// Access the metafields owned by a draft order.
    #[must_use]
    pub const fn metafields(&self, draft_order_id: i64) -> MetafieldService<'a> {
        MetafieldService::scoped(self.client, "draft_orders", draft_order_id)
    }
}
