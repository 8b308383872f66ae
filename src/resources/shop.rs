//! The shop resource.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GetOptions;

/// The shop a client is bound to. Read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub shop_owner: Option<String>,
    pub email: Option<String>,
    pub customer_email: Option<String>,
    pub domain: Option<String>,
    pub myshopify_domain: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub currency: Option<String>,
    pub money_format: Option<String>,
    pub money_with_currency_format: Option<String>,
    pub weight_unit: Option<String>,
    pub primary_locale: Option<String>,
    pub iana_timezone: Option<String>,
    pub timezone: Option<String>,
    pub plan_name: Option<String>,
    pub plan_display_name: Option<String>,
    pub password_enabled: Option<bool>,
    pub has_storefront: Option<bool>,
    pub source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ShopEnvelope {
    shop: Shop,
}

/// Read access to the shop resource.
pub struct ShopService<'a> {
    client: &'a Client,
}

impl<'a> ShopService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the shop's details.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, options: Option<&GetOptions>) -> Result<Shop, Error> {
        let path = format!("{}/shop.json", self.client.path_prefix());
        let envelope: ShopEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.shop)
    }
}
