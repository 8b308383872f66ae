//! Fulfillments, normally owned by an order.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, LineItem, ListOptions};

/// A shipment of one or more line items from an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub order_id: Option<i64>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,
    #[serde(skip_serializing)]
    pub shipment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    /// Whether the customer is notified of the shipment; write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Gateway receipt attached to a fulfillment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testcase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

#[derive(Deserialize)]
struct FulfillmentEnvelope {
    fulfillment: Fulfillment,
}

#[derive(Serialize)]
struct FulfillmentRequest<'a> {
    fulfillment: &'a Fulfillment,
}

#[derive(Deserialize)]
struct FulfillmentsEnvelope {
    fulfillments: Vec<Fulfillment>,
}

/// Operations on fulfillments.
///
/// Instances from `client.orders().fulfillments(order_id)` are scoped to
/// that order; `client.fulfillments()` addresses the unscoped collection.
pub struct FulfillmentService<'a> {
    client: &'a Client,
    owner: Option<(&'static str, i64)>,
}

impl<'a> FulfillmentService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self {
            client,
            owner: None,
        }
    }

    pub(crate) const fn scoped(client: &'a Client, resource: &'static str, id: i64) -> Self {
        Self {
            client,
            owner: Some((resource, id)),
        }
    }

    fn prefix(&self) -> String {
        self.client.fulfillment_path_prefix(self.owner)
    }

    /// Lists fulfillments.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Fulfillment>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: FulfillmentsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.fulfillments)
    }

    /// Counts fulfillments.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single fulfillment by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Fulfillment, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: FulfillmentEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.fulfillment)
    }

    /// Creates a fulfillment.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: FulfillmentEnvelope = self
            .client
            .post(&path, Some(&FulfillmentRequest { fulfillment }))
            .await?;
        Ok(envelope.fulfillment)
    }

    /// Updates a fulfillment.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, fulfillment: &Fulfillment) -> Result<Fulfillment, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: FulfillmentEnvelope = self
            .client
            .put(&path, Some(&FulfillmentRequest { fulfillment }))
            .await?;
        Ok(envelope.fulfillment)
    }

    /// Marks a fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn complete(&self, id: i64) -> Result<Fulfillment, Error> {
        self.action(id, "complete").await
    }

    /// Transitions a fulfillment to the open state.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn transition(&self, id: i64) -> Result<Fulfillment, Error> {
        self.action(id, "open").await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn cancel(&self, id: i64) -> Result<Fulfillment, Error> {
        self.action(id, "cancel").await
    }

    // Action endpoints take no payload.
    async fn action(&self, id: i64, action: &str) -> Result<Fulfillment, Error> {
        let path = format!("{}/{id}/{action}.json", self.prefix());
        let envelope: FulfillmentEnvelope = self.client.post::<_, ()>(&path, None).await?;
        Ok(envelope.fulfillment)
    }
}
