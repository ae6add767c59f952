//! Background video resolution.

use std::sync::Arc;
use tracing::{error, info};

use super::curated::{CuratedTable, VIDEO_TABLE};
use super::query::SearchQuery;
use super::{Resolution, ResolutionSource};
use crate::keywords::KeywordSet;
use crate::providers::{ProviderError, VideoCandidate, VideoSearchProvider};
use crate::server::metrics::record_provider_error;

/// Minimum width for a candidate or variant to count as HD.
pub const HD_MIN_WIDTH: u32 = 1280;

const HD_QUALITY: &str = "hd";

/// Picks the playable link from a candidate list.
///
/// The first HD candidate wins; within it an explicit "hd" variant at least
/// [`HD_MIN_WIDTH`] wide is preferred over its first variant. Without HD
/// candidates the first candidate's first variant is used.
pub fn select_video_link(candidates: &[VideoCandidate]) -> Option<&str> {
    match candidates.iter().find(|c| c.width >= HD_MIN_WIDTH) {
        Some(hd) => hd
            .variants
            .iter()
            .find(|v| {
                v.quality.as_deref() == Some(HD_QUALITY)
                    && v.width.is_some_and(|w| w >= HD_MIN_WIDTH)
            })
            .or_else(|| hd.variants.first())
            .map(|v| v.link.as_str()),
        None => candidates
            .first()
            .and_then(|c| c.variants.first())
            .map(|v| v.link.as_str()),
    }
}

pub struct VideoResolver {
    provider: Option<Arc<dyn VideoSearchProvider>>,
    table: &'static CuratedTable,
}

impl VideoResolver {
    /// `provider` is `None` when no API key is configured.
    pub fn new(provider: Option<Arc<dyn VideoSearchProvider>>) -> Self {
        Self {
            provider,
            table: &VIDEO_TABLE,
        }
    }

    /// Always returns a URL; provider failures end in the curated table.
    pub async fn resolve(
        &self,
        prompt: &str,
        keywords: &KeywordSet,
        query: &SearchQuery,
    ) -> Resolution {
        if let Some(provider) = &self.provider {
            if !keywords.is_empty() {
                match self.search(provider.as_ref(), query).await {
                    Ok(Some(resolution)) => {
                        info!("Selected video: {}", resolution.url);
                        return resolution;
                    }
                    Ok(None) => info!("No video found for {:?}", query.primary()),
                    Err(err) => {
                        error!("Error fetching from {}: {}", provider.name(), err);
                        record_provider_error(provider.name(), &err);
                    }
                }
            }
        }

        Resolution::new(self.table.lookup(prompt), ResolutionSource::Curated)
    }

    async fn search(
        &self,
        provider: &dyn VideoSearchProvider,
        query: &SearchQuery,
    ) -> Result<Option<Resolution>, ProviderError> {
        info!("Searching {} for: {}", provider.name(), query.primary());
        let mut candidates = provider.search_videos(query.primary()).await?;
        let mut source = ResolutionSource::Primary;

        if candidates.is_empty() {
            if let Some(fallback) = query.fallback() {
                info!("No results. Retrying with: {}", fallback);
                candidates = provider.search_videos(fallback).await?;
                source = ResolutionSource::Retried;
            }
        }

        Ok(select_video_link(&candidates).map(|link| Resolution::new(link, source)))
    }
}
