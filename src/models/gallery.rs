//! Galleries and gallery search.

use std::ops::Deref;

use crate::{
    models::{macros::str_opt_ref, nullable},
    result::Result,
    Client,
};
use serde::{Deserialize, Serialize};

/// A user-curated collection of images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    description: String,
    id: u64,
    #[serde(deserialize_with = "nullable")]
    spoiler_warning: Option<String>,
    #[serde(deserialize_with = "nullable")]
    thumbnail_id: Option<u64>,
    title: String,
    user: String,
    user_id: u64,
}

impl Gallery {
    /// Returns the gallery's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the gallery's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the spoiler warning (if set).
    pub fn spoiler_warning(&self) -> Option<&str> {
        str_opt_ref!(self.spoiler_warning)
    }

    /// Returns the ID of the cover image (if set).
    pub fn thumbnail_id(&self) -> Option<u64> {
        self.thumbnail_id
    }

    /// Returns the gallery's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creator's name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the creator's user ID.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }
}

/// One page of gallery search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySearch {
    total: u64,
    galleries: Vec<Gallery>,
}

impl GallerySearch {
    /// Searches galleries. `page` defaults to [`DEFAULT_PAGE`](crate::DEFAULT_PAGE).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid result page.
    pub async fn new(client: &Client, query: &str, page: Option<u32>) -> Result<Self> {
        let request = super::search("/api/v1/json/search/galleries", query, page);
        client.fetch_json(request).await
    }

    /// Returns the total number of matches.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the galleries on this page.
    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }
}

impl Deref for GallerySearch {
    type Target = Vec<Gallery>;

    fn deref(&self) -> &Self::Target {
        &self.galleries
    }
}
