//! Factory function for wiring the generator from resolved configuration

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::{AmbienceGenerator, AudioResolver, VideoResolver};
use crate::config::AppConfig;
use crate::keywords::create_keyword_extractor;
use crate::providers::{AudioSearchProvider, FreesoundClient, PexelsClient, VideoSearchProvider};

/// Create the generator and its providers.
///
/// A provider is only built when its API key is configured; without one the
/// matching resolver serves curated media only.
pub fn create_ambience_generator(config: &AppConfig) -> Result<AmbienceGenerator> {
    let extractor = Arc::new(create_keyword_extractor(&config.extractor));

    let video_provider: Option<Arc<dyn VideoSearchProvider>> = match &config.pexels_api_key {
        Some(key) => {
            info!("Pexels video search enabled ({})", config.pexels_base_url);
            Some(Arc::new(PexelsClient::new(
                key,
                &config.pexels_base_url,
                config.provider_timeout_sec,
            )?))
        }
        None => {
            info!("No Pexels API key, videos come from the curated table");
            None
        }
    };

    let audio_provider: Option<Arc<dyn AudioSearchProvider>> = match &config.freesound_api_key {
        Some(key) => {
            info!("Freesound audio search enabled ({})", config.freesound_base_url);
            Some(Arc::new(FreesoundClient::new(
                key,
                &config.freesound_base_url,
                config.provider_timeout_sec,
            )?))
        }
        None => {
            info!("No Freesound API key, audio uses the fallback clip");
            None
        }
    };

    Ok(AmbienceGenerator::new(
        extractor,
        VideoResolver::new(video_provider),
        AudioResolver::new(audio_provider),
    ))
}
