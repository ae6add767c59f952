//! Provider traits and the models they return.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to a media search provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Connection(_) => "connection",
            ProviderError::Timeout => "timeout",
            ProviderError::Api { .. } => "api",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Connection(err.to_string())
        }
    }
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoVariant {
    pub quality: Option<String>,
    pub width: Option<u32>,
    pub link: String,
}

/// A video search hit. Always has at least one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoCandidate {
    pub width: u32,
    pub variants: Vec<VideoVariant>,
}

impl VideoCandidate {
    /// Returns `None` when there is no variant to play.
    pub fn new(width: u32, variants: Vec<VideoVariant>) -> Option<Self> {
        if variants.is_empty() {
            None
        } else {
            Some(Self { width, variants })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoundPreviews {
    #[serde(rename = "preview-hq-mp3")]
    pub hq_mp3: Option<String>,
    #[serde(rename = "preview-lq-mp3")]
    pub lq_mp3: Option<String>,
}

/// A sound search hit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SoundResult {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub previews: Option<SoundPreviews>,
}

impl SoundResult {
    /// The high quality MP3 preview, else the low quality one.
    pub fn preview_url(&self) -> Option<&str> {
        let previews = self.previews.as_ref()?;
        previews
            .hq_mp3
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| previews.lq_mp3.as_deref().filter(|url| !url.is_empty()))
    }
}

/// A stock video search service.
#[async_trait]
pub trait VideoSearchProvider: Send + Sync {
    /// Provider name used in logs and metrics.
    fn name(&self) -> &str;

    /// Search landscape videos matching `query`, in provider ranking order.
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoCandidate>, ProviderError>;
}

/// A sound effect search service.
#[async_trait]
pub trait AudioSearchProvider: Send + Sync {
    /// Provider name used in logs and metrics.
    fn name(&self) -> &str;

    /// Search sounds matching `term`, in provider ranking order.
    async fn search_sounds(&self, term: &str) -> Result<Vec<SoundResult>, ProviderError>;
}
