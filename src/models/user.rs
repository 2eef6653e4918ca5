//! User profiles.

use crate::{
    client::Request,
    error::Privilege,
    models::{macros::envelope, zulu},
    result::Result,
    Client,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

envelope!(UserEnvelope { user: User });

/// A user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user's ID.
    id: u64,

    /// Display name.
    name: String,

    /// URL-safe form of the name.
    slug: String,

    /// Site role (`user`, `assistant`, `moderator`, `admin`).
    role: String,

    /// Profile description.
    description: String,

    /// Avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<Url>,

    /// When the account was created.
    #[serde(deserialize_with = "zulu::deserialize")]
    created_at: DateTime<Utc>,

    /// Number of comments posted.
    comment_count: u64,

    /// Number of images uploaded.
    uploads_count: u64,

    /// Number of forum posts.
    posts_count: u64,

    /// Number of forum topics started.
    topics_count: u64,

    /// Links the user has verified.
    links: Vec<Url>,

    /// Names of the user's awards.
    awards: Vec<String>,
}

impl User {
    /// Fetches the profile of the user with the given ID.
    ///
    /// # Errors
    ///
    /// Fails without touching the network if the client has no API key.
    /// Otherwise returns an error if the request fails, the server does not
    /// answer with a 2xx status, or the reply is not a valid profile.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        client.require_key(Privilege::UserRetrieval)?;
        let request = Request::get(format!("/api/v1/json/profiles/{id}"));
        client.fetch_inner::<UserEnvelope>(request).await
    }

    /// Returns the user's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the site role.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the profile description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the avatar URL (if set).
    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of comments posted.
    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    /// Returns the number of uploads.
    pub fn uploads_count(&self) -> u64 {
        self.uploads_count
    }

    /// Returns the number of forum posts.
    pub fn posts_count(&self) -> u64 {
        self.posts_count
    }

    /// Returns the number of forum topics.
    pub fn topics_count(&self) -> u64 {
        self.topics_count
    }

    /// Returns the verified links.
    pub fn links(&self) -> &[Url] {
        &self.links
    }

    /// Returns the award names.
    pub fn awards(&self) -> &[String] {
        &self.awards
    }
}
