//! Filters: the tag rules that decide what gets hidden or spoilered.

use crate::{
    client::Request,
    error::Privilege,
    models::{
        macros::{envelope, str_opt_ref},
        nullable, DEFAULT_PAGE,
    },
    result::Result,
    Client,
};
use serde::{Deserialize, Serialize};

envelope!(FilterEnvelope { filter: Filter });
envelope!(FiltersEnvelope { filters: Vec<Filter> });

/// A filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    /// The filter's ID.
    id: u64,

    /// The filter's name.
    name: String,

    /// The filter's description.
    description: String,

    /// Owner of the filter, `None` for system filters.
    #[serde(deserialize_with = "nullable")]
    user_id: Option<u64>,

    /// Number of users using the filter.
    user_count: u64,

    /// Whether this is a system filter.
    system: bool,

    /// Whether the filter is public.
    public: bool,

    /// Tags whose images are spoilered.
    spoilered_tag_ids: Vec<u64>,

    /// Search query whose matches are spoilered.
    #[serde(deserialize_with = "nullable")]
    spoilered_complex: Option<String>,

    /// Tags whose images are hidden.
    hidden_tag_ids: Vec<u64>,

    /// Search query whose matches are hidden.
    #[serde(deserialize_with = "nullable")]
    hidden_complex: Option<String>,
}

impl Filter {
    /// Fetches the filter with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not answer
    /// with a 2xx status, or the reply is not a valid filter.
    pub async fn new(client: &Client, id: u64) -> Result<Self> {
        let request = Request::get(format!("/api/v1/json/filters/{id}"));
        client.fetch_inner::<FilterEnvelope>(request).await
    }

    /// Lists the system filters. `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// # Errors
    ///
    /// Same as [`Filter::new`].
    pub async fn system(client: &Client, page: Option<u32>) -> Result<Vec<Self>> {
        let request =
            Request::get("/api/v1/json/filters/system").query("page", page.unwrap_or(DEFAULT_PAGE));
        client.fetch_inner::<FiltersEnvelope>(request).await
    }

    /// Lists the filters owned by the API key's user. `page` defaults to [`DEFAULT_PAGE`].
    ///
    /// # Errors
    ///
    /// Fails without touching the network if the client has no API key.
    /// Otherwise fails like [`Filter::new`].
    pub async fn user(client: &Client, page: Option<u32>) -> Result<Vec<Self>> {
        client.require_key(Privilege::UserFilters)?;
        let request =
            Request::get("/api/v1/json/filters/user").query("page", page.unwrap_or(DEFAULT_PAGE));
        client.fetch_inner::<FiltersEnvelope>(request).await
    }

    /// Returns the filter's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the filter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the filter's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the owner's ID (`None` for system filters).
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Returns how many users use the filter.
    pub fn user_count(&self) -> u64 {
        self.user_count
    }

    /// Returns whether this is a system filter.
    pub fn system_filter(&self) -> bool {
        self.system
    }

    /// Returns whether the filter is public.
    pub fn public(&self) -> bool {
        self.public
    }

    /// Returns the IDs of spoilered tags.
    pub fn spoilered_tag_ids(&self) -> &[u64] {
        &self.spoilered_tag_ids
    }

    /// Returns the spoiler query (if any).
    pub fn spoilered_complex(&self) -> Option<&str> {
        str_opt_ref!(self.spoilered_complex)
    }

    /// Returns the IDs of hidden tags.
    pub fn hidden_tag_ids(&self) -> &[u64] {
        &self.hidden_tag_ids
    }

    /// Returns the hide query (if any).
    pub fn hidden_complex(&self) -> Option<&str> {
        str_opt_ref!(self.hidden_complex)
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
