//! Payment transactions, scoped under orders.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// A payment transaction recorded against an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing)]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub message: Option<String>,
    #[serde(skip_serializing)]
    pub authorization: Option<String>,
    #[serde(skip_serializing)]
    pub location_id: Option<i64>,
    #[serde(skip_serializing)]
    pub user_id: Option<i64>,
    #[serde(skip_serializing)]
    pub device_id: Option<i64>,
    #[serde(skip_serializing)]
    pub error_code: Option<String>,
    #[serde(skip_serializing)]
    pub source_name: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: Transaction,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    transaction: &'a Transaction,
}

#[derive(Deserialize)]
struct TransactionsEnvelope {
    transactions: Vec<Transaction>,
}

/// Operations on an order's transactions.
pub struct TransactionService<'a> {
    client: &'a Client,
}

impl<'a> TransactionService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self, order_id: i64) -> String {
        format!("{}/orders/{order_id}/transactions", self.client.path_prefix())
    }

    /// Lists the transactions of an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(
        &self,
        order_id: i64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Transaction>, Error> {
        let path = format!("{}.json", self.prefix(order_id));
        let envelope: TransactionsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.transactions)
    }

    /// Counts the transactions of an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, order_id: i64, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix(order_id));
        self.client.count(&path, options).await
    }

    /// Fetches a single transaction of an order.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(
        &self,
        order_id: i64,
        id: i64,
        options: Option<&GetOptions>,
    ) -> Result<Transaction, Error> {
        let path = format!("{}/{id}.json", self.prefix(order_id));
        let envelope: TransactionEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.transaction)
    }

    /// Creates a transaction against an order (capture, refund, ...).
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(
        &self,
        order_id: i64,
        transaction: &Transaction,
    ) -> Result<Transaction, Error> {
        let path = format!("{}.json", self.prefix(order_id));
        let envelope: TransactionEnvelope = self
            .client
            .post(&path, Some(&TransactionRequest { transaction }))
            .await?;
        Ok(envelope.transaction)
    }
}
