use crate::{
    error::{Error, Privilege},
    result::Result,
    safe::{safe, safe_async},
};
use reqwest::{header::CONTENT_TYPE, Client as ReqwestClient, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

/// Origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://derpibooru.org";

/// Settings a [`Client`] is built from.
///
/// # Example
///
/// ```rust
/// use dotderpi::client::{Client, Config};
///
/// let config = Config::new()
///     .api_key("secret")
///     .base_url("https://trixiebooru.org");
/// let client = Client::from_config(config);
/// assert!(client.has_key());
/// assert_eq!(client.base_url(), "https://trixiebooru.org");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl Config {
    /// A configuration without an API key, pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `DERPI_API_KEY` and `DERPI_BASE_URL` from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("DERPI_API_KEY").ok(),
            base_url: std::env::var("DERPI_BASE_URL").ok(),
        }
    }

    /// Sets the API key sent as the `key` query parameter.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the API origin.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

/// Handle used by every endpoint to reach the API.
///
/// The configuration is fixed at construction. Calls share nothing but
/// this immutable state, so one client may serve any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    base_url: String,
    api_key: Option<String>,
}

impl Client {
    /// Creates an anonymous client for the production API.
    pub fn new() -> Client {
        Self::from_config(Config::default())
    }

    /// Creates a client for the production API that authenticates with `key`.
    pub fn with_key(key: impl Into<String>) -> Client {
        Self::from_config(Config::new().api_key(key))
    }

    /// Creates a client from `config`.
    ///
    /// An empty API key counts as no key at all.
    pub fn from_config(config: Config) -> Client {
        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = config.api_key.filter(|key| !key.is_empty());
        Client {
            http: ReqwestClient::new(),
            base_url,
            api_key,
        }
    }

    /// Returns the API origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if the client was configured with an API key.
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn require_key(&self, privilege: Privilege) -> Result<()> {
        if self.has_key() {
            Ok(())
        } else {
            log::debug!("refusing {privilege} without an API key");
            Err(Error::MissingKey(privilege))
        }
    }

    pub(crate) fn url(&self, request: &Request) -> Result<Url> {
        let mut url = safe(|| Url::parse(&self.base_url)?.join(&request.path)).map_err(Error::Url)?;

        let mut params = Vec::new();
        if let Some(key) = &self.api_key {
            set_param(&mut params, "key", key.clone());
        }
        for (key, value) in &request.query {
            set_param(&mut params, key, value.clone());
        }

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Sends `request` and validates the JSON reply as `T`.
    pub(crate) async fn fetch_json<T>(&self, request: Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let reply = self.dispatch(&request).await;
        if let Err(err) = &reply {
            log::warn!("{} {} failed: {err}", request.method, request.path);
        }
        reply
    }

    /// Like [`fetch_json`](Self::fetch_json), but opens the envelope the resource arrives in.
    pub(crate) async fn fetch_inner<E>(&self, request: Request) -> Result<E::Inner>
    where
        E: Envelope,
    {
        self.fetch_json::<E>(request).await.map(Envelope::open)
    }

    async fn dispatch<T>(&self, request: &Request) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(request)?;

        let response = {
            let mut builder = self
                .http
                .request(request.method.clone(), url)
                .header(CONTENT_TYPE, "application/json");
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }
            log::info!("{} request for {} dispatched", request.method, request.path);
            // reqwest errors carry the request URL, and with it the key
            safe_async(async { builder.send().await.map_err(reqwest::Error::without_url) })
                .await
                .map_err(Error::Transport)?
        };

        let status = response.status();
        log::debug!("response status: {status}");
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let value = safe_async(async {
            response
                .json::<Value>()
                .await
                .map_err(reqwest::Error::without_url)
        })
        .await
        .map_err(Error::Decode)?;
        safe(|| serde_json::from_value(value)).map_err(Error::Validation)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// A response that wraps the resource under a single named field.
pub(crate) trait Envelope: DeserializeOwned {
    type Inner;

    fn open(self) -> Self::Inner;
}

/// One API call: where it goes, how, and with what.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    path: String,
    method: Method,
    query: Vec<(String, String)>,
    body: Option<String>,
}

impl Request {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn query(mut self, key: &str, value: impl ToString) -> Self {
        set_param(&mut self.query, key, value.to_string());
        self
    }

    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(safe(|| serde_json::to_string(body)).map_err(Error::Encode)?);
        Ok(self)
    }
}

/// Sets `key` to `value`, replacing the first same-named pair and dropping any later ones.
fn set_param(params: &mut Vec<(String, String)>, key: &str, value: String) {
    match params.iter().position(|(k, _)| k == key) {
        Some(pos) => {
            params[pos].1 = value;
            let mut idx = 0;
            params.retain(|(k, _)| {
                let keep = idx <= pos || k != key;
                idx += 1;
                keep
            });
        }
        None => params.push((key.to_string(), value)),
    }
}
