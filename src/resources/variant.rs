//! Product variants.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// A purchasable variation of a product.
///
/// Money amounts are decimal strings on the wire and are kept as strings to
/// avoid lossy float conversions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing)]
    pub inventory_item_id: Option<i64>,
    #[serde(skip_serializing)]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct VariantEnvelope {
    variant: Variant,
}

#[derive(Serialize)]
struct VariantRequest<'a> {
    variant: &'a Variant,
}

#[derive(Deserialize)]
struct VariantsEnvelope {
    variants: Vec<Variant>,
}

/// Operations on product variants.
///
/// Creation and listing are scoped under a product; lookups and updates
/// address variants directly by id.
pub struct VariantService<'a> {
    client: &'a Client,
}

impl<'a> VariantService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the variants of a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(
        &self,
        product_id: i64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Variant>, Error> {
        let path = format!(
            "{}/products/{product_id}/variants.json",
            self.client.path_prefix()
        );
        let envelope: VariantsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.variants)
    }

    /// Counts the variants of a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(
        &self,
        product_id: i64,
        options: Option<&CountOptions>,
    ) -> Result<i64, Error> {
        let path = format!(
            "{}/products/{product_id}/variants/count.json",
            self.client.path_prefix()
        );
        self.client.count(&path, options).await
    }

    /// Fetches a single variant by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Variant, Error> {
        let path = format!("{}/variants/{id}.json", self.client.path_prefix());
        let envelope: VariantEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.variant)
    }

    /// Creates a variant under a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, product_id: i64, variant: &Variant) -> Result<Variant, Error> {
        let path = format!(
            "{}/products/{product_id}/variants.json",
            self.client.path_prefix()
        );
        let envelope: VariantEnvelope = self
            .client
            .post(&path, Some(&VariantRequest { variant }))
            .await?;
        Ok(envelope.variant)
    }

    /// Updates a variant.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, variant: &Variant) -> Result<Variant, Error> {
        let path = format!("{}/variants/{id}.json", self.client.path_prefix());
        let envelope: VariantEnvelope = self
            .client
            .put(&path, Some(&VariantRequest { variant }))
            .await?;
        Ok(envelope.variant)
    }

    /// Deletes a variant from a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, product_id: i64, id: i64) -> Result<(), Error> {
        let path = format!(
            "{}/products/{product_id}/variants/{id}.json",
            self.client.path_prefix()
        );
        self.client.delete(&path).await
    }
}
