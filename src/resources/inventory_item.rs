//! Inventory items.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListOptions;

/// The inventory tracking record behind a product variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Decimal unit cost string, e.g. `"12.50"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct InventoryItemEnvelope {
    inventory_item: InventoryItem,
}

#[derive(Serialize)]
struct InventoryItemRequest<'a> {
    inventory_item: &'a InventoryItem,
}

#[derive(Deserialize)]
struct InventoryItemsEnvelope {
    inventory_items: Vec<InventoryItem>,
}

/// Operations on the inventory items collection.
pub struct InventoryItemService<'a> {
    client: &'a Client,
}

impl<'a> InventoryItemService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/inventory_items", self.client.path_prefix())
    }

    /// Lists inventory items; the `ids` filter is required by the platform.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<InventoryItem>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: InventoryItemsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.inventory_items)
    }

    /// Fetches a single inventory item by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64) -> Result<InventoryItem, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: InventoryItemEnvelope = self.client.get::<_, ()>(&path, None).await?;
        Ok(envelope.inventory_item)
    }

    /// Updates an inventory item.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, item: &InventoryItem) -> Result<InventoryItem, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: InventoryItemEnvelope = self
            .client
            .put(&path, Some(&InventoryItemRequest { inventory_item: item }))
            .await?;
        Ok(envelope.inventory_item)
    }
}
