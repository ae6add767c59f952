//! Ambient audio resolution.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::{error, info};

use super::curated::{sound_search_phrase, FALLBACK_AUDIO_URL};
use super::{Resolution, ResolutionSource};
use crate::keywords::KeywordSet;
use crate::providers::{AudioSearchProvider, SoundResult};
use crate::server::metrics::record_provider_error;

/// Number of top results the random pick is drawn from.
pub const AUDIO_PICK_POOL: usize = 5;

/// Maps the prompt to a sound search term.
///
/// Keyword phrases are checked before the prompt's own words; the first one
/// found in the sound vocabulary wins. Otherwise `"<prompt> ambience"`.
pub fn sound_search_term(prompt: &str, keywords: &KeywordSet) -> String {
    let prompt_words = prompt.to_lowercase();
    keywords
        .phrases()
        .iter()
        .map(|phrase| phrase.to_lowercase())
        .chain(prompt_words.split_whitespace().map(str::to_string))
        .find_map(|word| sound_search_phrase(&word))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} ambience", prompt))
}

/// Picks one of the first [`AUDIO_PICK_POOL`] results uniformly at random.
pub fn pick_sound<'a, R: Rng + ?Sized>(
    results: &'a [SoundResult],
    rng: &mut R,
) -> Option<&'a SoundResult> {
    let pool = &results[..results.len().min(AUDIO_PICK_POOL)];
    pool.choose(rng)
}

pub struct AudioResolver {
    provider: Option<Arc<dyn AudioSearchProvider>>,
    fallback_url: &'static str,
}

impl AudioResolver {
    /// `provider` is `None` when no API key is configured.
    pub fn new(provider: Option<Arc<dyn AudioSearchProvider>>) -> Self {
        Self {
            provider,
            fallback_url: FALLBACK_AUDIO_URL,
        }
    }

    /// Always returns a URL; failures end in the fixed fallback clip.
    pub async fn resolve(&self, prompt: &str, keywords: &KeywordSet) -> Resolution {
        let term = sound_search_term(prompt, keywords);

        if let Some(provider) = &self.provider {
            info!("Searching {} for: {}", provider.name(), term);
            match provider.search_sounds(&term).await {
                Ok(results) => {
                    let chosen = pick_sound(&results, &mut rand::rng());
                    if let Some(sound) = chosen {
                        if let Some(url) = sound.preview_url() {
                            info!(
                                "Selected audio: {}",
                                sound.name.as_deref().unwrap_or("<unnamed>")
                            );
                            return Resolution::new(url, ResolutionSource::Primary);
                        }
                        info!("Selected sound has no MP3 preview");
                    } else {
                        info!("No sounds found for {:?}", term);
                    }
                }
                Err(err) => {
                    error!("{} error: {}", provider.name(), err);
                    record_provider_error(provider.name(), &err);
                }
            }
        }

        Resolution::new(self.fallback_url, ResolutionSource::Curated)
    }
}
