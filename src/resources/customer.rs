//! Customers and their addresses.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, CustomerAddress, GetOptions, ListOptions, MetafieldService, Order};

/// A customer of the shop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<CustomerAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,
    #[serde(skip_serializing)]
    pub state: Option<String>,
    #[serde(skip_serializing)]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing)]
    pub orders_count: Option<i64>,
    #[serde(skip_serializing)]
    pub total_spent: Option<String>,
    #[serde(skip_serializing)]
    pub last_order_id: Option<i64>,
    #[serde(skip_serializing)]
    pub last_order_name: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Options for the customer search endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerSearchOptions {
    /// Search query, e.g. `email:bob@example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Deserialize)]
struct CustomerEnvelope {
    customer: Customer,
}

#[derive(Serialize)]
struct CustomerRequest<'a> {
    customer: &'a Customer,
}

#[derive(Deserialize)]
struct CustomersEnvelope {
    customers: Vec<Customer>,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    orders: Vec<Order>,
}

/// Operations on the customers collection.
pub struct CustomerService<'a> {
    client: &'a Client,
}

impl<'a> CustomerService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/customers", self.client.path_prefix())
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: CustomersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.customers)
    }

    /// Counts customers.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single customer by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Customer, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: CustomerEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.customer)
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: CustomerEnvelope = self
            .client
            .post(&path, Some(&CustomerRequest { customer }))
            .await?;
        Ok(envelope.customer)
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, customer: &Customer) -> Result<Customer, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: CustomerEnvelope = self
            .client
            .put(&path, Some(&CustomerRequest { customer }))
            .await?;
        Ok(envelope.customer)
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }

    /// Searches customers matching a query.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn search(
        &self,
        options: Option<&CustomerSearchOptions>,
    ) -> Result<Vec<Customer>, Error> {
        let path = format!("{}/search.json", self.prefix());
        let envelope: CustomersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.customers)
    }

    /// Lists the orders belonging to a customer.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list_orders(
        &self,
        customer_id: i64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Order>, Error> {
        let path = format!("{}/{customer_id}/orders.json", self.prefix());
        let envelope: OrdersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.orders)
    }

    /// Access the metafields owned by a customer.
    #[must_use]
    pub const fn metafields(&self, customer_id: i64) -> MetafieldService<'a> {
        MetafieldService::scoped(self.client, "customers", customer_id)
    }
}
