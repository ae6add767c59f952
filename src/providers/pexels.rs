//! Pexels API client for stock video search.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};

use super::provider::{ProviderError, VideoCandidate, VideoSearchProvider, VideoVariant};
use crate::server::metrics::record_provider_request;

pub const PEXELS_API_BASE: &str = "https://api.pexels.com";
pub const VIDEO_PAGE_SIZE: u32 = 15;
pub const VIDEO_ORIENTATION: &str = "landscape";
pub const VIDEO_SIZE: &str = "medium";

pub struct PexelsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    videos: Vec<PexelsVideo>,
}

#[derive(Deserialize)]
struct PexelsVideo {
    width: u32,
    #[serde(default)]
    video_files: Vec<PexelsVideoFile>,
}

#[derive(Deserialize)]
struct PexelsVideoFile {
    quality: Option<String>,
    width: Option<u32>,
    link: String,
}

impl PexelsClient {
    /// Create a new Pexels client.
    ///
    /// # Arguments
    /// * `api_key` - Pexels API key, sent as the `Authorization` header
    /// * `base_url` - API base URL (e.g., "https://api.pexels.com")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(api_key: &str, base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create Pexels HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, query: &str) -> Result<Vec<VideoCandidate>, ProviderError> {
        let url = format!("{}/videos/search", self.base_url);
        let per_page = VIDEO_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", VIDEO_ORIENTATION),
                ("size", VIDEO_SIZE),
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

        let body: VideoSearchResponse = response.json().await?;
        into_candidates(body)
    }
}

/// Fails on the first video that has no files to play.
fn into_candidates(body: VideoSearchResponse) -> Result<Vec<VideoCandidate>, ProviderError> {
    body.videos
        .into_iter()
        .enumerate()
        .map(|(index, video)| {
            let variants = video
                .video_files
                .into_iter()
                .map(|file| VideoVariant {
                    quality: file.quality,
                    width: file.width,
                    link: file.link,
                })
                .collect();
            VideoCandidate::new(video.width, variants).ok_or_else(|| {
                ProviderError::InvalidResponse(format!("video {} has no video_files", index))
            })
        })
        .collect()
}

#[async_trait]
impl VideoSearchProvider for PexelsClient {
    fn name(&self) -> &str {
        "pexels"
    }

    async fn search_videos(&self, query: &str) -> Result<Vec<VideoCandidate>, ProviderError> {
        let start = Instant::now();
        let result = self.fetch(query).await;
        record_provider_request(self.name(), start.elapsed());
        result
    }
}
