//! Prompt to media resolution.
//!
//! The [`AmbienceGenerator`] extracts keywords, builds a [`SearchQuery`], and
//! resolves a video and an audio URL concurrently. Each resolver ends in a
//! curated fallback so a URL is always produced.

pub mod audio;
pub mod curated;
mod factory;
pub mod generator;
pub mod query;
pub mod video;

pub use audio::AudioResolver;
pub use factory::create_ambience_generator;
pub use generator::{AmbienceGenerator, ResolvedMedia};
pub use query::SearchQuery;
pub use video::VideoResolver;

/// Where a resolved URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Provider results for the primary query.
    Primary,
    /// Provider results for the degraded retry query.
    Retried,
    /// The static curated table.
    Curated,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Primary => "primary",
            ResolutionSource::Retried => "retried",
            ResolutionSource::Curated => "curated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn new(url: impl Into<String>, source: ResolutionSource) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}
