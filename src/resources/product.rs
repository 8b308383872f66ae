//! Products and their nested options and images.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions, MetafieldService, Variant};

/// A product in the shop's catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A customizable option on a product (size, color, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<i64>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ProductEnvelope {
    product: Product,
}

#[derive(Serialize)]
struct ProductRequest<'a> {
    product: &'a Product,
}

#[derive(Deserialize)]
struct ProductsEnvelope {
    products: Vec<Product>,
}

/// Operations on the products collection.
pub struct ProductService<'a> {
    client: &'a Client,
}

impl<'a> ProductService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/products", self.client.path_prefix())
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Product>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: ProductsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.products)
    }

    /// Counts products.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Product, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: ProductEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.product)
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, product: &Product) -> Result<Product, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: ProductEnvelope = self
            .client
            .post(&path, Some(&ProductRequest { product }))
            .await?;
        Ok(envelope.product)
    }

    /// Updates a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, product: &Product) -> Result<Product, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: ProductEnvelope = self
            .client
            .put(&path, Some(&ProductRequest { product }))
            .await?;
        Ok(envelope.product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }

    /// Access the metafields owned by a product.
    #[must_use]
    pub const fn metafields(&self, product_id: i64) -> MetafieldService<'a> {
        MetafieldService::scoped(self.client, "products", product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_has_single_product_key() {
        let product = Product {
            title: Some("Widget".to_string()),
            vendor: Some("Acme".to_string()),
            created_at: Some(Utc::now()),
            ..Product::default()
        };

        let json = serde_json::to_value(ProductRequest { product: &product }).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["product"]);

        // Server-assigned timestamps are never sent back.
        assert!(json["product"].get("created_at").is_none());
        assert_eq!(json["product"]["title"], "Widget");
    }

    #[test]
    fn test_product_deserializes_from_response_shape() {
        let body = r#"{
            "id": 632910392,
            "title": "IPod Nano - 8GB",
            "vendor": "Apple",
            "product_type": "Cult Products",
            "handle": "ipod-nano",
            "created_at": "2016-05-17T04:25:22-04:00",
            "tags": "Emotive, Flash Memory",
            "options": [{"id": 594680422, "product_id": 632910392, "name": "Color"}]
        }"#;

        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.id, Some(632_910_392));
        assert_eq!(product.title.as_deref(), Some("IPod Nano - 8GB"));
        assert!(product.created_at.is_some());
        assert_eq!(
            product.options.unwrap()[0].name.as_deref(),
            Some("Color")
        );
    }
}
