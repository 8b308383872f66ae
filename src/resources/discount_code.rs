//! Discount codes, scoped under price rules.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discount code belonging to a price rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRuleDiscountCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub price_rule_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing)]
    pub usage_count: Option<i64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct DiscountCodeEnvelope {
    discount_code: PriceRuleDiscountCode,
}

#[derive(Serialize)]
struct DiscountCodeRequest<'a> {
    discount_code: &'a PriceRuleDiscountCode,
}

#[derive(Deserialize)]
struct DiscountCodesEnvelope {
    discount_codes: Vec<PriceRuleDiscountCode>,
}

/// Operations on a price rule's discount codes.
pub struct DiscountCodeService<'a> {
    client: &'a Client,
}

impl<'a> DiscountCodeService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self, price_rule_id: i64) -> String {
        format!(
            "{}/price_rules/{price_rule_id}/discount_codes",
            self.client.path_prefix()
        )
    }

    /// Lists the discount codes of a price rule.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, price_rule_id: i64) -> Result<Vec<PriceRuleDiscountCode>, Error> {
        let path = format!("{}.json", self.prefix(price_rule_id));
        let envelope: DiscountCodesEnvelope = self.client.get::<_, ()>(&path, None).await?;
        Ok(envelope.discount_codes)
    }

    /// Fetches a single discount code.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, price_rule_id: i64, id: i64) -> Result<PriceRuleDiscountCode, Error> {
        let path = format!("{}/{id}.json", self.prefix(price_rule_id));
        let envelope: DiscountCodeEnvelope = self.client.get::<_, ()>(&path, None).await?;
        Ok(envelope.discount_code)
    }

    /// Creates a discount code under a price rule.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(
        &self,
        price_rule_id: i64,
        discount_code: &PriceRuleDiscountCode,
    ) -> Result<PriceRuleDiscountCode, Error> {
        let path = format!("{}.json", self.prefix(price_rule_id));
        let envelope: DiscountCodeEnvelope = self
            .client
            .post(&path, Some(&DiscountCodeRequest { discount_code }))
            .await?;
        Ok(envelope.discount_code)
    }

    /// Updates a discount code.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(
        &self,
        price_rule_id: i64,
        id: i64,
        discount_code: &PriceRuleDiscountCode,
    ) -> Result<PriceRuleDiscountCode, Error> {
        let path = format!("{}/{id}.json", self.prefix(price_rule_id));
        let envelope: DiscountCodeEnvelope = self
            .client
            .put(&path, Some(&DiscountCodeRequest { discount_code }))
            .await?;
        Ok(envelope.discount_code)
    }

    /// Deletes a discount code.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, price_rule_id: i64, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix(price_rule_id));
        self.client.delete(&path).await
    }
}
