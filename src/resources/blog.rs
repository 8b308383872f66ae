//! Online store blogs.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CountOptions, GetOptions, ListOptions};

/// A blog hosted in the online store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Blog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct BlogEnvelope {
    blog: Blog,
}

#[derive(Serialize)]
struct BlogRequest<'a> {
    blog: &'a Blog,
}

#[derive(Deserialize)]
struct BlogsEnvelope {
    blogs: Vec<Blog>,
}

/// Operations on the blogs collection.
pub struct BlogService<'a> {
    client: &'a Client,
}

impl<'a> BlogService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self) -> String {
        format!("{}/blogs", self.client.path_prefix())
    }

    /// Lists blogs.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Blog>, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: BlogsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.blogs)
    }

    /// Counts blogs.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn count(&self, options: Option<&CountOptions>) -> Result<i64, Error> {
        let path = format!("{}/count.json", self.prefix());
        self.client.count(&path, options).await
    }

    /// Fetches a single blog by id.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, id: i64, options: Option<&GetOptions>) -> Result<Blog, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: BlogEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.blog)
    }

    /// Creates a blog.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn create(&self, blog: &Blog) -> Result<Blog, Error> {
        let path = format!("{}.json", self.prefix());
        let envelope: BlogEnvelope = self.client.post(&path, Some(&BlogRequest { blog })).await?;
        Ok(envelope.blog)
    }

    /// Updates a blog.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, id: i64, blog: &Blog) -> Result<Blog, Error> {
        let path = format!("{}/{id}.json", self.prefix());
        let envelope: BlogEnvelope = self.client.put(&path, Some(&BlogRequest { blog })).await?;
        Ok(envelope.blog)
    }

    /// Deletes a blog.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let path = format!("{}/{id}.json", self.prefix());
        self.client.delete(&path).await
    }
}
