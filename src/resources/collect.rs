//! Collects, the links between products and custom collections.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// Membership of a product in a custom collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing)]
    pub sort_value: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct CollectEnvelope {
    collect: Collect,
}

#[derive(Serialize)]
struct CollectRequest<'a> {
    collect: &'a Collect,
}

#[derive(Deserialize)]
struct CollectsEnvelope {
    collects: Vec<Collect>,
}

/// Operations on the collects collection.
pub struct CollectService<'a> {
    client: &'a Client,
}

impl<'a> CollectService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/collects", self.client.path_prefix())
    }

    /// Lists collects.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Collect>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: CollectsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.collects)
    }

    /// Counts collects.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single collect by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Collect, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: CollectEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.collect)
    }

    /// Adds a product to a custom collection.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, collect: &Collect) -> Result<Collect, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: CollectEnvelope = self
            .client
            .post(&path, Some(&CollectRequest { collect }))
            .await?;
        Ok(envelope.collect)
    }

    /// Removes a product from a custom collection.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }
}
