//! Image comments and comment search.

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

envelope!(CommentEnvelope { comment: Comment });

/// A comment on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// The comment's ID.
    id: u64,

    /// Name of the author.
    author: String,

    /// Author's avatar.
    #[serde(deserialize_with = "nullable")]
    avatar: Option<String>,

    /// Comment text in the site's markup.
    body: String,

    /// When the comment was posted.
    #[serde(deserialize_with = "zulu::deserialize")]
    created_at: DateTime<Utc>,

    /// When the comment was last edited.
    #[serde(deserialize_with = "zulu::nullable")]
    edited_at: Option<DateTime<Utc>>,

    /// The image commented on.
    #[serde(deserialize_with = "nullable")]
    image_id: Option<u64>,

    /// The author's user ID, `None` if anonymous.
    #[serde(deserialize_with = "nullable")]
    user_id: Option<u64>,
}

impl Comment {
    /// Fetches the comment with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid comment.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        let request = Request::get(format!("/api/v1/json/comments/{id}"));
        client.fetch_inner::<CommentEnvelope>(request).await
    }

    /// Returns the comment's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the author's name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the author's avatar (if set).
    pub fn avatar(&self) -> Option<&str> {
        str_opt_ref!(self.avatar)
    }

    /// Returns the comment text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the comment was posted.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the comment was last edited (if ever).
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edited_at
    }

    /// Returns the image's ID (if known).
    pub fn image_id(&self) -> Option<u64> {
        self.image_id
    }

    /// Returns the author's user ID (if not anonymous).
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}

/// One page of comment search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSearch {
    total: u64,
    comments: Vec<Comment>,
}

impl CommentSearch {
    /// Searches comments. `page` defaults to [`DEFAULT_PAGE`](crate::DEFAULT_PAGE).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid result page.
    pub async fn new(client: &Client, query: &str, page: Option<u32>) -> Result<Self> {
        let request = super::search("/api/v1/json/search/comments", query, page);
        client.fetch_json(request).await
    }

    /// Returns the total number of matches.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the comments on this page.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

impl Deref for CommentSearch {
    type Target = Vec<Comment>;

    fn deref(&self) -> &Self::Target {
        &self.comments
    }
}
