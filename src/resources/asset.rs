//! Theme assets.
//!
//! Assets are keyed by path within a theme rather than by id, so every
//! operation addresses `themes/{theme_id}/assets.json` and selects the asset
//! through an `asset[key]` query parameter.

use crate::client::Client;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListOptions;

/// A file in a theme (template, stylesheet, image, ...).
///
/// Text content travels in `value`, binary content base64-encoded in
/// `attachment`; `src` uploads from a URL instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asset {
    /// Path of the asset within the theme, e.g. `templates/index.liquid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Base64-encoded binary content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    #[serde(skip_serializing)]
    pub content_type: Option<String>,
    #[serde(skip_serializing)]
    pub public_url: Option<String>,
    #[serde(skip_serializing)]
    pub size: Option<i64>,
    #[serde(skip_serializing)]
    pub theme_id: Option<i64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct AssetEnvelope {
    asset: Asset,
}

#[derive(Serialize)]
struct AssetRequest<'a> {
    asset: &'a Asset,
}

#[derive(Deserialize)]
struct AssetsEnvelope {
    assets: Vec<Asset>,
}

#[derive(Serialize)]
struct AssetGetOptions<'a> {
    #[serde(rename = "asset[key]")]
    key: &'a str,
    theme_id: i64,
}

/// Operations on a theme's assets.
pub struct AssetService<'a> {
    client: &'a Client,
}

impl<'a> AssetService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn prefix(&self, theme_id: i64) -> String {
        format!("{}/themes/{theme_id}/assets", self.client.path_prefix())
    }

    /// Lists the metadata of every asset in a theme.
    ///
    /// The platform omits `value` and `attachment` from listings.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn list(
        &self,
        theme_id: i64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Asset>, Error> {
        let path = format!("{}.json", self.prefix(theme_id));
        let envelope: AssetsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.assets)
    }

    /// Fetches a single asset by its key within a theme.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn get(&self, theme_id: i64, key: &str) -> Result<Asset, Error> {
        let path = format!("{}.json", self.prefix(theme_id));
        let options = AssetGetOptions { key, theme_id };
        let envelope: AssetEnvelope = self.client.get(&path, Some(&options)).await?;
        Ok(envelope.asset)
    }

    /// Creates or updates the asset at `asset.key`.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn update(&self, theme_id: i64, asset: &Asset) -> Result<Asset, Error> {
        let path = format!("{}.json", self.prefix(theme_id));
        let envelope: AssetEnvelope = self
            .client
            .put(&path, Some(&AssetRequest { asset }))
            .await?;
        Ok(envelope.asset)
    }

    /// Deletes the asset at `key` from a theme.
    ///
    /// # Errors
    ///
    /// Propagates pipeline errors.
    pub async fn delete(&self, theme_id: i64, key: &str) -> Result<(), Error> {
        let path = format!(
            "{}.json?asset[key]={}",
            self.prefix(theme_id),
            urlencoding::encode(key)
        );
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_options_use_bracketed_key_parameter() {
        let options = AssetGetOptions {
            key: "templates/index.liquid",
            theme_id: 828155753,
        };
        let pairs = crate::client::serialize_to_query(&options).unwrap();
        assert!(pairs.contains(&(
            "asset[key]".to_string(),
            "templates/index.liquid".to_string()
        )));
        assert!(pairs.contains(&("theme_id".to_string(), "828155753".to_string())));
    }

    #[test]
    fn test_server_metadata_is_not_serialized() {
        let asset = Asset {
            key: Some("assets/app.js".to_string()),
            value: Some("console.log('hi')".to_string()),
            content_type: Some("text/javascript".to_string()),
            size: Some(17),
            ..Asset::default()
        };

        let json = serde_json::to_value(AssetRequest { asset: &asset }).unwrap();
        let body = &json["asset"];
        assert_eq!(body["key"], "assets/app.js");
        assert!(body.get("content_type").is_none());
        assert!(body.get("size").is_none());
    }
}
