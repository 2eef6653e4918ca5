//! Forum posts and post search.

use std::ops::Deref;

use crate::{
    client::Request,
    models::{
        macros::{envelope, str_opt_ref},
        nullable, zulu,
    },
    result::Result,
    Client,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

envelope!(PostEnvelope { post: Post });

/// A forum post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Name of the author.
    author: String,

    /// Author's avatar.
    #[serde(deserialize_with = "nullable")]
    avatar: Option<String>,

    /// Post text in the site's markup.
    body: String,

    /// When the post was created.
    #[serde(deserialize_with = "zulu::deserialize")]
    created_at: DateTime<Utc>,

    /// Reason given for the last edit.
    #[serde(deserialize_with = "nullable")]
    edit_reason: Option<String>,

    /// When the post was last edited.
    #[serde(deserialize_with = "zulu::nullable")]
    edited_at: Option<DateTime<Utc>>,

    /// The post's ID.
    id: u64,

    /// When the post was last updated.
    #[serde(deserialize_with = "zulu::deserialize")]
    updated_at: DateTime<Utc>,

    /// The author's user ID, `None` if anonymous.
    #[serde(deserialize_with = "nullable")]
    user_id: Option<u64>,
}

impl Post {
    /// Fetches the post with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid post.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        let request = Request::get(format!("/api/v1/json/posts/{id}"));
        client.fetch_inner::<PostEnvelope>(request).await
    }

    /// Returns the author's name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the author's avatar (if set).
    pub fn avatar(&self) -> Option<&str> {
        str_opt_ref!(self.avatar)
    }

    /// Returns the post text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the post was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the reason for the last edit (if any).
    pub fn edit_reason(&self) -> Option<&str> {
        str_opt_ref!(self.edit_reason)
    }

    /// Returns when the post was last edited (if ever).
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edited_at
    }

    /// Returns the post's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns when the post was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the author's user ID (if not anonymous).
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}

/// One page of post search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSearch {
    total: u64,
    posts: Vec<Post>,
}

impl PostSearch {
    /// Searches forum posts. `page` defaults to [`DEFAULT_PAGE`](crate::DEFAULT_PAGE).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid result page.
    pub async fn new(client: &Client, query: &str, page: Option<u32>) -> Result<Self> {
        let request = super::search("/api/v1/json/search/posts", query, page);
        client.fetch_json(request).await
    }

    /// Returns the total number of matches.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the posts on this page.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl Deref for PostSearch {
    type Target = Vec<Post>;

    fn deref(&self) -> &Self::Target {
        &self.posts
    }
}
