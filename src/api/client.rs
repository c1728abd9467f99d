//! Catalog Client
//!
//! HTTP client for the PokeAPI catalog. One GET per resource, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{LocationArea, LocationPage, Pokemon};

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

// == Catalog Api Trait ==
/// The remote catalog as seen by the shell.
///
/// Fetch methods take full URLs so callers can use them as cache keys and
/// follow pagination links verbatim.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Base URL, without trailing slash.
    fn base_url(&self) -> &str;

    async fn location_page(&self, url: &str) -> Result<LocationPage, FetchError>;

    async fn location_area(&self, url: &str) -> Result<LocationArea, FetchError>;

    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError>;

    fn first_location_page_url(&self) -> String {
        format!("{}/location", self.base_url())
    }

    fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url(), name)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url(), name)
    }
}

// == PokeApi Client ==
/// reqwest-backed [`CatalogApi`].
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the shell configuration.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogApi for PokeApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn location_page(&self, url: &str) -> Result<LocationPage, FetchError> {
        self.get_json(url).await
    }

    async fn location_area(&self, url: &str) -> Result<LocationArea, FetchError> {
        self.get_json(url).await
    }

    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError> {
        self.get_json(url).await
    }
}
