//! Metafields, top-level or owned by another resource.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// A metafield attached to the shop or to an owning resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The stored value; its JSON type depends on `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub owner_id: Option<i64>,
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct MetafieldEnvelope {
    metafield: Metafield,
}

#[derive(Serialize)]
struct MetafieldRequest<'a> {
    metafield: &'a Metafield,
}

#[derive(Deserialize)]
struct MetafieldsEnvelope {
    metafields: Vec<Metafield>,
}

/// Operations on metafields.
///
/// An unscoped instance (from `client.metafields()`) addresses the shop's
/// top-level metafields; a scoped instance (from a parent service such as
/// `client.products().metafields(id)`) addresses the metafields owned by
/// that resource.
pub struct MetafieldService<'a> {
    client: &'a Client,
    owner: Option<(&'static str, i64)>,
}

impl<'a> MetafieldService<'a> {
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
        self.client.metafield_path_prefix(self.owner)
    }

    /// Lists metafields.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Metafield>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: MetafieldsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.metafields)
    }

    /// Counts metafields.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single metafield by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Metafield, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: MetafieldEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.metafield)
    }

    /// Creates a metafield.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, metafield: &Metafield) -> Result<Metafield, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: MetafieldEnvelope = self
            .client
            .post(&path, Some(&MetafieldRequest { metafield }))
            .await?;
        Ok(envelope.metafield)
    }

    /// Updates a metafield.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, metafield: &Metafield) -> Result<Metafield, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: MetafieldEnvelope = self
            .client
            .put(&path, Some(&MetafieldRequest { metafield }))
            .await?;
        Ok(envelope.metafield)
    }

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_fields_are_not_serialized() {
        let metafield = Metafield {
            namespace: Some("inventory".to_string()),
            key: Some("warehouse".to_string()),
            value: Some(serde_json::json!(25)),
            value_type: Some("integer".to_string()),
            owner_id: Some(1),
            owner_resource: Some("product".to_string()),
            ..Metafield::default()
        };

        let json = serde_json::to_value(MetafieldRequest {
            metafield: &metafield,
        })
        .unwrap();
        let body = &json["metafield"];
        assert_eq!(body["namespace"], "inventory");
        assert_eq!(body["value"], 25);
        assert!(body.get("owner_id").is_none());
        assert!(body.get("owner_resource").is_none());
    }
}
