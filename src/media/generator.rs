//! The prompt to media pipeline.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::audio::AudioResolver;
use super::query::SearchQuery;
use super::video::VideoResolver;
use crate::keywords::{KeywordExtractor, KeywordSet};
use crate::server::metrics::{record_generate_request, record_media_resolution};

/// Media chosen for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia {
    pub keywords: Vec<String>,
    pub vibe: String,
    pub video_url: String,
    pub audio_url: String,
}

impl ResolvedMedia {
    /// `vibe` is the mood carried by `keywords`.
    pub fn assemble(keywords: &KeywordSet, video_url: String, audio_url: String) -> Self {
        Self {
            keywords: keywords.phrases().to_vec(),
            vibe: keywords.mood().to_string(),
            video_url,
            audio_url,
        }
    }
}

pub struct AmbienceGenerator {
    extractor: Arc<KeywordExtractor>,
    video: VideoResolver,
    audio: AudioResolver,
}

impl AmbienceGenerator {
    pub fn new(extractor: Arc<KeywordExtractor>, video: VideoResolver, audio: AudioResolver) -> Self {
        Self {
            extractor,
            video,
            audio,
        }
    }

    pub async fn generate(&self, prompt: &str) -> ResolvedMedia {
        record_generate_request();

        let keywords = self.extractor.extract(prompt);
        let query = SearchQuery::build(prompt, &keywords);
        info!(
            "Prompt {:?}: keywords {:?}, query {:?}",
            prompt,
            keywords.phrases(),
            query.primary()
        );

        let (video, audio) = tokio::join!(
            self.video.resolve(prompt, &keywords, &query),
            self.audio.resolve(prompt, &keywords),
        );
        record_media_resolution("video", video.source);
        record_media_resolution("audio", audio.source);

        ResolvedMedia::assemble(&keywords, video.url, audio.url)
    }
}
