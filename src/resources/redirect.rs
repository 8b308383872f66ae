//! URL redirects.

use crate::client::Client;
use crate::error::Error;
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// A redirect from one online store path to another.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Redirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Deserialize)]
struct RedirectEnvelope {
    redirect: Redirect,
}

#[derive(Serialize)]
struct RedirectRequest<'a> {
    redirect: &'a Redirect,
}

#[derive(Deserialize)]
struct RedirectsEnvelope {
    redirects: Vec<Redirect>,
}

/// Operations on the URL redirects collection.
pub struct RedirectService<'a> {
    client: &'a Client,
}

impl<'a> RedirectService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/redirects", self.client.path_prefix())
    }

    /// Lists redirects.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Redirect>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: RedirectsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.redirects)
    }

    /// Counts redirects.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single redirect by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Redirect, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: RedirectEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.redirect)
    }

    /// Creates a redirect.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, redirect: &Redirect) -> Result<Redirect, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: RedirectEnvelope = self
            .client
            .post(&path, Some(&RedirectRequest { redirect }))
            .await?;
        Ok(envelope.redirect)
    }

    /// Updates a redirect.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, redirect: &Redirect) -> Result<Redirect, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: RedirectEnvelope = self
            .client
            .put(&path, Some(&RedirectRequest { redirect }))
            .await?;
        Ok(envelope.redirect)
    }

    /// Deletes a redirect.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }
}
