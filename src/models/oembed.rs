//! oEmbed metadata for image pages.

use crate::{client::Request, result::Result, Client};
use serde::{Deserialize, Serialize};
use url::Url;

/// Cache lifetime the API always reports, in seconds.
pub const CACHE_AGE: u32 = 7200;

/// Provider name the API always reports.
pub const PROVIDER_NAME: &str = "Derpibooru";

/// Provider URL the API always reports.
pub const PROVIDER_URL: &str = "https://derpibooru.org";

/// oEmbed type the API always reports.
pub const KIND: &str = "photo";

/// oEmbed version the API always reports.
pub const VERSION: &str = "1.0";

/// oEmbed description of an image.
///
/// The provider fields normally carry the constants in this module.
/// They are decoded as-is rather than checked against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oembed {
    author_name: String,
    author_url: Url,
    cache_age: u32,
    derpibooru_comments: u64,
    derpibooru_id: u64,
    derpibooru_score: i64,
    derpibooru_tags: Vec<String>,
    provider_name: String,
    provider_url: String,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    version: String,
}

impl Oembed {
    /// Fetches oEmbed data for the image page or file at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not valid oEmbed data.
    pub async fn new(client: &Client, url: &str) -> Result<Self> {
        let request = Request::get("/api/v1/json/oembed").query("url", url);
        client.fetch_json(request).await
    }

    /// Returns the artist names.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the image's source.
    pub fn author_url(&self) -> &Url {
        &self.author_url
    }

    /// Returns the cache lifetime in seconds.
    pub fn cache_age(&self) -> u32 {
        self.cache_age
    }

    /// Returns the image's comment count.
    pub fn comments(&self) -> u64 {
        self.derpibooru_comments
    }

    /// Returns the image's ID.
    pub fn image_id(&self) -> u64 {
        self.derpibooru_id
    }

    /// Returns the image's score.
    pub fn score(&self) -> i64 {
        self.derpibooru_score
    }

    /// Returns the image's tag names.
    pub fn tags(&self) -> &[String] {
        &self.derpibooru_tags
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns the provider URL.
    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the oEmbed type.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the oEmbed version.
    pub fn version(&self) -> &str {
        &self.version
    }
}
