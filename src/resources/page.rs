//! Online store pages.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions, MetafieldService};

/// A page of static content in the online store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub shop_id: Option<i64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct PageEnvelope {
    page: Page,
}

#[derive(Serialize)]
struct PageRequest<'a> {
    page: &'a Page,
}

#[derive(Deserialize)]
struct PagesEnvelope {
    pages: Vec<Page>,
}

/// Operations on the pages collection.
pub struct PageService<'a> {
    client: &'a Client,
}

impl<'a> PageService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/pages", self.client.path_prefix())
    }

    /// Lists pages.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Page>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: PagesEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.pages)
    }

    /// Counts pages.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single page by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Page, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: PageEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.page)
    }

    /// Creates a page.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, page: &Page) -> Result<Page, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: PageEnvelope = self.client.post(&path, Some(&PageRequest { page })).await?;
        Ok(envelope.page)
    }

    /// Updates a page.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, page: &Page) -> Result<Page, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: PageEnvelope = self.client.put(&path, Some(&PageRequest { page })).await?;
        Ok(envelope.page)
    }

    /// Deletes a page.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }

    /// Access the metafields owned by a page.
    #[must_use]
    pub const fn metafields(&self, page_id: i64) -> MetafieldService<'a> {
        MetafieldService::scoped(self.client, "pages", page_id)
    }
}
