//! Customer addresses, scoped under customers.

use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};

use super::{GetOptions, ListOptions};

/// A postal address on a customer record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

#[derive(Deserialize)]
struct CustomerAddressEnvelope {
    customer_address: CustomerAddress,
}

#[derive(Serialize)]
struct CustomerAddressRequest<'a> {
    customer_address: &'a CustomerAddress,
}

#[derive(Deserialize)]
struct CustomerAddressesEnvelope {
    addresses: Vec<CustomerAddress>,
}

/// Operations on a customer's addresses.
pub struct CustomerAddressService<'a> {
    client: &'a Client,
}

impl<'a> CustomerAddressService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self, customer_id: i64) -> String {
        format!(
            "{}/customers/{customer_id}/addresses",
            self.client.path_prefix()
        )
    }

    /// Lists the addresses of a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(
        &self,
        customer_id: i64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<CustomerAddress>, Error> {
        let path = format!("{}.json", self.prefix(customer_id));
        let envelope: CustomerAddressesEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.addresses)
    }

    /// Fetches a single address of a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(
        &self,
        customer_id: i64,
        id: i64,
        options: Option<&GetOptions>,
    ) -> Result<CustomerAddress, Error> {
        let path = format!("{}/{id}.json", self.prefix(customer_id));
        let envelope: CustomerAddressEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.customer_address)
    }

    /// Creates an address for a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(
        &self,
        customer_id: i64,
        address: &CustomerAddress,
    ) -> Result<CustomerAddress, Error> {
        let path = format!("{}.json", self.prefix(customer_id));
        let envelope: CustomerAddressEnvelope = self
            .client
            .post(
                &path,
                Some(&CustomerAddressRequest {
                    customer_address: address,
                }),
            )
            .await?;
        Ok(envelope.customer_address)
    }

    /// Updates an address of a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(
        &self,
        customer_id: i64,
        id: i64,
        address: &CustomerAddress,
    ) -> Result<CustomerAddress, Error> {
        let path = format!("{}/{id}.json", self.prefix(customer_id));
        let envelope: CustomerAddressEnvelope = self
            .client
            .put(
                &path,
                Some(&CustomerAddressRequest {
                    customer_address: address,
                }),
            )
            .await?;
        Ok(envelope.customer_address)
    }

    /// Deletes an address from a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, customer_id: i64, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix(customer_id));
        self.client.delete(&path).await
    }

    /// Makes an address the customer's default.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn set_default(&self, customer_id: i64, id: i64) -> Result<CustomerAddress, Error> {
        let path = format!("{}/{id}/default.json", self.prefix(customer_id));
        let envelope: CustomerAddressEnvelope = self.client.put::<_, ()>(&path, None).await?;
        Ok(envelope.customer_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_uses_customer_address_key() {
        let address = CustomerAddress {
            address1: Some("1 Rue des Carrieres".to_string()),
            city: Some("Montreal".to_string()),
            ..CustomerAddress::default()
        };

        let json = serde_json::to_value(CustomerAddressRequest {
            customer_address: &address,
        })
        .unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["customer_address"]);
        assert_eq!(json["customer_address"]["city"], "Montreal");
    }
}
