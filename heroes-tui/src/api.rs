//! OpenDota statistics client
//!
//! Only the effect handler calls into this module; reducers and components
//! never touch the network.

use std::time::Duration;

use heroes_core::Hero;
use thiserror::Error;

use crate::config::Config;

/// Path of the hero statistics listing, relative to the endpoint
pub const HERO_STATS_PATH: &str = "/api/heroStats";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that does not decode
    #[error("hero stats request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("hero stats request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Clone)]
pub struct HeroesClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HeroesClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_timeout(&config.api_endpoint, config.request_timeout)
    }

    /// Client for `endpoint`, which must not end with `/`
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("heroes/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET {endpoint}/api/heroStats`
    pub async fn fetch_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let url = format!("{}{}", self.endpoint, HERO_STATS_PATH);
        tracing::debug!(%url, "GET hero stats");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<Vec<Hero>>().await?)
    }
}
