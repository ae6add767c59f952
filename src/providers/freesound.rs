//! Freesound API client for sound effect search.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};

use super::provider::{AudioSearchProvider, ProviderError, SoundResult};
use crate::server::metrics::record_provider_request;

pub const FREESOUND_API_BASE: &str = "https://freesound.org/apiv2";
pub const SOUND_FIELDS: &str = "id,name,previews";
/// Skip clips that are too short to loop or too long to preview.
pub const SOUND_DURATION_FILTER: &str = "duration:[15 TO 300]";

pub struct FreesoundClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<SoundResult>,
}

impl FreesoundClient {
    pub fn new(token: &str, base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create Freesound HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, term: &str) -> Result<Vec<SoundResult>, ProviderError> {
        let url = format!("{}/search/text/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", term),
                ("token", self.token.as_str()),
                ("fields", SOUND_FIELDS),
                ("filter", SOUND_DURATION_FILTER),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TextSearchResponse = response.json().await?;
        Ok(body.results)
    }
}

#[async_trait]
impl AudioSearchProvider for FreesoundClient {
    fn name(&self) -> &str {
        "freesound"
    }

    async fn search_sounds(&self, term: &str) -> Result<Vec<SoundResult>, ProviderError> {
        let start = Instant::now();
        let result = self.fetch(term).await;
        record_provider_request(self.name(), start.elapsed());
        result
    }
}
