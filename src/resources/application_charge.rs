//! One-time application charges.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GetOptions, ListOptions};

/// A one-time charge an app bills a merchant for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Decimal price string, e.g. `"100.00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing)]
    pub api_client_id: Option<i64>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub decorated_return_url: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct ApplicationChargeEnvelope {
    application_charge: ApplicationCharge,
}

#[derive(Serialize)]
struct ApplicationChargeRequest<'a> {
    application_charge: &'a ApplicationCharge,
}

#[derive(Deserialize)]
struct ApplicationChargesEnvelope {
    application_charges: Vec<ApplicationCharge>,
}

/// Operations on one-time application charges.
pub struct ApplicationChargeService<'a> {
    client: &'a Client,
}

impl<'a> ApplicationChargeService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/application_charges", self.client.path_prefix())
    }

    /// Creates a charge; the merchant must then confirm it at the returned
    /// confirmation URL.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, charge: &ApplicationCharge) -> Result<ApplicationCharge, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: ApplicationChargeEnvelope = self
            .client
            .post(&path, Some(&ApplicationChargeRequest { application_charge: charge }))
            .await?;
        Ok(envelope.application_charge)
    }

    /// Fetches a single charge by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(
        &self,
        id: i64,
        options: Option<&GetOptions>,
    ) -> Result<ApplicationCharge, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: ApplicationChargeEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.application_charge)
    }

    /// Lists charges.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<Vec<ApplicationCharge>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: ApplicationChargesEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.application_charges)
    }

    /// Activates an accepted charge.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn activate(
        &self,
        id: i64,
        charge: &ApplicationCharge,
    ) -> Result<ApplicationCharge, Error> {
        let path = format!("{}/{id}/activate.json", self.prefix());
        let envelope: ApplicationChargeEnvelope = self
            .client
            .post(&path, Some(&ApplicationChargeRequest { application_charge: charge }))
            .await?;
        Ok(envelope.application_charge)
    }
}
