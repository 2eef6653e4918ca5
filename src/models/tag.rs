//! Tags and tag search.

use std::ops::Deref;

use crate::{
    client::Request,
    models::{
        macros::{envelope, str_opt_ref},
        nullable,
    },
    result::Result,
    Client,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

envelope!(TagEnvelope { tag: Tag });

/// The category a tag belongs to. Tags outside these categories fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagCategory {
    /// A named character.
    Character,
    /// Fan-made content.
    ContentFanmade,
    /// Official content.
    ContentOfficial,
    /// An error or artifact tag.
    Error,
    /// Original character.
    Oc,
    /// Where the content came from (e.g. the artist).
    Origin,
    /// Content rating.
    Rating,
    /// Species.
    Species,
    /// Spoiler tag.
    Spoiler,
}

/// A tag with its aliases and implications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// The tag's ID.
    id: u64,

    /// The tag's name.
    name: String,

    /// URL-safe form of the name.
    slug: String,

    /// Long description.
    description: String,

    /// Short description.
    short_description: String,

    /// Image shown in place of spoilered images with this tag.
    #[serde(deserialize_with = "nullable")]
    spoiler_image_uri: Option<String>,

    /// Name of the tag this one is an alias of.
    #[serde(deserialize_with = "nullable")]
    aliased_tag: Option<String>,

    /// Names of the tags aliased to this one.
    aliases: Vec<String>,

    /// See [`TagCategory`].
    category: TagCategory,

    /// Do-not-post entries attached to the tag.
    dnp_entries: Vec<Value>,

    /// Number of images carrying the tag.
    images: u64,

    /// Tags that imply this one.
    implied_by_tags: Vec<String>,

    /// Tags this one implies.
    implied_tags: Vec<String>,

    /// The name with its namespace stripped.
    name_in_namespace: String,

    /// The namespace (`artist`, `oc`, ...), if any.
    #[serde(deserialize_with = "nullable")]
    namespace: Option<String>,
}

impl Tag {
    /// Fetches the tag with the given slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid tag.
    pub async fn new(client: &Client, slug: &str) -> Result<Self> {
        let request = Request::get(format!("/api/v1/json/tags/{slug}"));
        client.fetch_inner::<TagEnvelope>(request).await
    }

    /// Returns the tag's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the tag's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag's slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the long description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the short description.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the spoiler image URI (if set).
    pub fn spoiler_image_uri(&self) -> Option<&str> {
        str_opt_ref!(self.spoiler_image_uri)
    }

    /// Returns the tag this one is aliased to (if any).
    pub fn aliased_tag(&self) -> Option<&str> {
        str_opt_ref!(self.aliased_tag)
    }

    /// Returns the tags aliased to this one.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the tag's category.
    pub fn category(&self) -> TagCategory {
        self.category
    }

    /// Returns the do-not-post entries.
    pub fn dnp_entries(&self) -> &[Value] {
        &self.dnp_entries
    }

    /// Returns how many images carry the tag.
    pub fn images(&self) -> u64 {
        self.images
    }

    /// Returns the tags implying this one.
    pub fn implied_by_tags(&self) -> &[String] {
        &self.implied_by_tags
    }

    /// Returns the tags this one implies.
    pub fn implied_tags(&self) -> &[String] {
        &self.implied_tags
    }

    /// Returns the name without its namespace.
    pub fn name_in_namespace(&self) -> &str {
        &self.name_in_namespace
    }

    /// Returns the namespace (if any).
    pub fn namespace(&self) -> Option<&str> {
        str_opt_ref!(self.namespace)
    }
}

/// One page of tag search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSearch {
    tags: Vec<Tag>,
    total: u64,
}

impl TagSearch {
    /// Searches tags. `page` defaults to [`DEFAULT_PAGE`](crate::DEFAULT_PAGE).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid result page.
    pub async fn new(client: &Client, query: &str, page: Option<u32>) -> Result<Self> {
        let request = super::search("/api/v1/json/search/tags", query, page);
        client.fetch_json(request).await
    }

    /// Returns the tags on this page.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns the total number of matches.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Deref for TagSearch {
    type Target = Vec<Tag>;

    fn deref(&self) -> &Self::Target {
        &self.tags
    }
}
