//! Images: lookup, the featured image, uploads, and (reverse) image search.

use std::{collections::HashMap, ops::Deref};

use crate::{
    client::Request,
    error::Privilege,
    models::{
        macros::{envelope, str_opt_ref},
        nullable, zulu, DEFAULT_DISTANCE, DEFAULT_PER_PAGE,
    },
    result::Result,
    Client,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

envelope!(ImageEnvelope { image: Image });

/// An image hosted on the booru, with its tags, scores and rendered sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// The image's ID.
    id: u64,

    /// When the image was created.
    #[serde(deserialize_with = "zulu::deserialize")]
    created_at: DateTime<Utc>,

    /// When the image was last updated.
    #[serde(deserialize_with = "zulu::deserialize")]
    updated_at: DateTime<Utc>,

    /// When the image was first seen, before any duplicate merging.
    #[serde(deserialize_with = "zulu::deserialize")]
    first_seen_at: DateTime<Utc>,

    /// Net score (upvotes minus downvotes).
    score: i64,

    /// Number of comments on the image.
    comment_count: u64,

    /// Width in pixels.
    width: u32,

    /// Height in pixels.
    height: u32,

    /// Description in the site's markup.
    description: String,

    /// Name of the uploader, `None` if anonymous.
    #[serde(deserialize_with = "nullable")]
    uploader: Option<String>,

    /// ID of the uploader, `None` if anonymous.
    #[serde(deserialize_with = "nullable")]
    uploader_id: Option<u64>,

    /// Whether thumbnails have been generated.
    thumbnails_generated: bool,

    /// Whether the image is hidden behind a spoiler for the current filter.
    spoilered: bool,

    /// IDs of the tags on the image.
    tag_ids: Vec<u64>,

    /// Names of the tags on the image.
    tags: Vec<String>,

    /// Number of tags on the image.
    tag_count: u64,

    /// The image's primary source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,

    /// All source URLs of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_urls: Option<Vec<String>>,

    /// Rendered versions of the image, keyed by size name (`full`, `thumb`, ...).
    representations: HashMap<String, String>,

    /// Corner intensities (`ne`, `nw`, `se`, `sw`) used for duplicate detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intensities: Option<HashMap<String, f64>>,

    /// Width divided by height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<f64>,

    /// File size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<u64>,

    /// File extension (`png`, `jpg`, `webm`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    /// MIME type of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,

    /// File name of the upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// SHA-512 of the file as uploaded, before optimization.
    #[serde(deserialize_with = "nullable")]
    orig_sha512_hash: Option<String>,

    /// SHA-512 of the file as served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sha512_hash: Option<String>,

    /// File size in bytes before optimization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    orig_size: Option<u64>,

    /// Whether processing has finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    processed: Option<bool>,

    /// Why the image was deleted, if it was.
    #[serde(deserialize_with = "nullable")]
    deletion_reason: Option<String>,

    /// ID of the image this one was merged into, if it is a duplicate.
    #[serde(deserialize_with = "nullable")]
    duplicate_of: Option<u64>,

    /// Whether the image is hidden from users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hidden_from_users: Option<bool>,

    /// URL of the full image file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view_url: Option<String>,

    /// Lower bound of the Wilson score interval over the votes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wilson_score: Option<f64>,

    /// Number of favorites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    faves: Option<u64>,

    /// Number of upvotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    upvotes: Option<u64>,

    /// Number of downvotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    downvotes: Option<u64>,

    /// Whether the image is animated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    animated: Option<bool>,

    /// Duration in seconds for animated images and videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
}

impl Image {
    /// Fetches the image with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid image.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        let request = Request::get(format!("/api/v1/json/images/{id}"));
        client.fetch_inner::<ImageEnvelope>(request).await
    }

    /// Fetches the currently featured image.
    ///
    /// # Errors
    ///
    /// Same as [`Image::new`].
    pub async fn featured(client: &Client) -> Result<Self> {
        let request = Request::get("/api/v1/json/images/featured");
        client.fetch_inner::<ImageEnvelope>(request).await
    }

    /// Submits an image by URL and returns the created image.
    ///
    /// # Errors
    ///
    /// Fails without touching the network if the client has no API key.
    /// Otherwise fails like [`Image::new`].
    pub async fn upload(client: &Client, upload: &Upload) -> Result<Self> {
        client.require_key(Privilege::ImageUpload)?;
        let request = Request::post("/api/v1/json/images").json(&upload.body())?;
        client.fetch_inner::<ImageEnvelope>(request).await
    }

    /// Returns the image's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns when the image was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the image was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the image was first seen.
    pub fn first_seen_at(&self) -> DateTime<Utc> {
        self.first_seen_at
    }

    /// Returns the net score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the number of comments.
    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the uploader's name (if not anonymous).
    pub fn uploader(&self) -> Option<&str> {
        str_opt_ref!(self.uploader)
    }

    /// Returns the uploader's ID (if not anonymous).
    pub fn uploader_id(&self) -> Option<u64> {
        self.uploader_id
    }

    /// Returns whether thumbnails have been generated.
    pub fn thumbnails_generated(&self) -> bool {
        self.thumbnails_generated
    }

    /// Returns whether the image is spoilered.
    pub fn spoilered(&self) -> bool {
        self.spoilered
    }

    /// Returns the IDs of the image's tags.
    pub fn tag_ids(&self) -> &[u64] {
        &self.tag_ids
    }

    /// Returns the names of the image's tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the number of tags.
    pub fn tag_count(&self) -> u64 {
        self.tag_count
    }

    /// Returns the primary source URL (if present).
    pub fn source_url(&self) -> Option<&str> {
        str_opt_ref!(self.source_url)
    }

    /// Returns all source URLs (if present).
    pub fn source_urls(&self) -> Option<&[String]> {
        self.source_urls.as_deref()
    }

    /// Returns the rendered versions of the image keyed by size name.
    pub fn representations(&self) -> &HashMap<String, String> {
        &self.representations
    }

    /// Returns the corner intensities (if present).
    pub fn intensities(&self) -> Option<&HashMap<String, f64>> {
        self.intensities.as_ref()
    }

    /// Returns the aspect ratio (if present).
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    /// Returns the file size in bytes (if present).
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Returns the file extension (if present).
    pub fn format(&self) -> Option<&str> {
        str_opt_ref!(self.format)
    }

    /// Returns the MIME type (if present).
    pub fn mime_type(&self) -> Option<&str> {
        str_opt_ref!(self.mime_type)
    }

    /// Returns the file name (if present).
    pub fn name(&self) -> Option<&str> {
        str_opt_ref!(self.name)
    }

    /// Returns the SHA-512 of the original upload (if known).
    pub fn orig_sha512_hash(&self) -> Option<&str> {
        str_opt_ref!(self.orig_sha512_hash)
    }

    /// Returns the SHA-512 of the served file (if present).
    pub fn sha512_hash(&self) -> Option<&str> {
        str_opt_ref!(self.sha512_hash)
    }

    /// Returns the size of the original upload in bytes (if present).
    pub fn orig_size(&self) -> Option<u64> {
        self.orig_size
    }

    /// Returns whether processing has finished (if present).
    pub fn processed(&self) -> Option<bool> {
        self.processed
    }

    /// Returns the deletion reason (if deleted).
    pub fn deletion_reason(&self) -> Option<&str> {
        str_opt_ref!(self.deletion_reason)
    }

    /// Returns the ID this image was merged into (if a duplicate).
    pub fn duplicate_of(&self) -> Option<u64> {
        self.duplicate_of
    }

    /// Returns whether the image is hidden from users (if present).
    pub fn hidden_from_users(&self) -> Option<bool> {
        self.hidden_from_users
    }

    /// Returns the URL of the full file (if present).
    pub fn view_url(&self) -> Option<&str> {
        str_opt_ref!(self.view_url)
    }

    /// Returns the Wilson score (if present).
    pub fn wilson_score(&self) -> Option<f64> {
        self.wilson_score
    }

    /// Returns the number of favorites (if present).
    pub fn faves(&self) -> Option<u64> {
        self.faves
    }

    /// Returns the number of upvotes (if present).
    pub fn upvotes(&self) -> Option<u64> {
        self.upvotes
    }

    /// Returns the number of downvotes (if present).
    pub fn downvotes(&self) -> Option<u64> {
        self.downvotes
    }

    /// Returns whether the image is animated (if present).
    pub fn animated(&self) -> Option<bool> {
        self.animated
    }

    /// Returns the duration in seconds (if present).
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// One page of image search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearch {
    /// Total number of matching images across all pages.
    total: u64,

    /// Images on this page.
    images: Vec<Image>,

    /// The authenticated user's interactions with these images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interactions: Option<Vec<Value>>,
}

impl ImageSearch {
    /// Searches images with the site's query syntax.
    ///
    /// `page` defaults to [`DEFAULT_PAGE`](crate::DEFAULT_PAGE) and
    /// `per_page` to [`DEFAULT_PER_PAGE`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid result page.
    pub async fn new(
        client: &Client,
        query: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Self> {
        let request = super::search("/api/v1/json/search/images", query, page)
            .query("per_page", per_page.unwrap_or(DEFAULT_PER_PAGE));
        client.fetch_json(request).await
    }

    /// Finds images that look like the one at `url`.
    ///
    /// `distance` is the match threshold and defaults to [`DEFAULT_DISTANCE`].
    ///
    /// # Errors
    ///
    /// Same as [`ImageSearch::new`].
    pub async fn reverse(client: &Client, url: &str, distance: Option<f64>) -> Result<Self> {
        let request = Request::post("/api/v1/json/search/reverse")
            .query("url", url)
            .query("distance", distance.unwrap_or(DEFAULT_DISTANCE));
        client.fetch_json(request).await
    }

    /// Returns the total number of matches.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the images on this page.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Returns the user's interactions with the images (if present).
    pub fn interactions(&self) -> Option<&[Value]> {
        self.interactions.as_deref()
    }
}

impl Deref for ImageSearch {
    type Target = Vec<Image>;

    fn deref(&self) -> &Self::Target {
        &self.images
    }
}

/// Parameters for [`Image::upload`].
///
/// ```rust
/// use dotderpi::image::Upload;
///
/// let upload = Upload::new("https://example.com/pony.png")
///     .description("A pony")
///     .tags(["safe", "pony"])
///     .source_url("https://example.com");
/// assert_eq!(upload.url(), "https://example.com/pony.png");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Upload {
    url: String,
    description: Option<String>,
    tags: Option<Vec<String>>,
    source_url: Option<String>,
}

impl Upload {
    /// Upload of the file at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the source the image was taken from.
    #[must_use]
    pub fn source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    /// Returns the URL of the file to upload.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn body(&self) -> UploadBody<'_> {
        UploadBody {
            url: &self.url,
            image: UploadFields {
                description: str_opt_ref!(self.description),
                tags: self.tags.as_ref().map(|tags| tags.join(", ")),
                source_url: str_opt_ref!(self.source_url),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct UploadBody<'a> {
    url: &'a str,
    image: UploadFields<'a>,
}

#[derive(Debug, Serialize)]
struct UploadFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_url: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_body_joins_tags() {
        let upload = Upload::new("https://example.com/a.png")
            .description("Test image")
            .tags(["test", "safe"])
            .source_url("https://example.com");
        let body = serde_json::to_value(upload.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "url": "https://example.com/a.png",
                "image": {
                    "description": "Test image",
                    "tags": "test, safe",
                    "source_url": "https://example.com"
                }
            })
        );
    }

    #[test]
    fn upload_body_omits_unset_fields() {
        let body = serde_json::to_value(Upload::new("https://example.com/a.png").body()).unwrap();
        assert_eq!(body, json!({ "url": "https://example.com/a.png", "image": {} }));
    }
}
