//! Factory function for creating the keyword extractor

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use super::extractor::{KeywordExtractor, PhraseExtractor};
use super::key_phrase::KeyPhraseExtractor;
use super::simple_split::SimpleSplitExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExtractorKind {
    /// Stop-word filtered 1–2 word key phrases ranked by relevance.
    #[default]
    #[value(name = "keyphrase")]
    KeyPhrase,
    /// First long words of the prompt.
    Simple,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorSettings {
    pub kind: ExtractorKind,
    pub max_input_chars: usize,
    pub stop_words_path: Option<PathBuf>,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            kind: ExtractorKind::KeyPhrase,
            max_input_chars: 1000,
            stop_words_path: None,
        }
    }
}

/// Create the keyword extractor once, before serving.
///
/// If the preferred capability cannot be initialised the simple split
/// strategy is used for the whole process lifetime.
pub fn create_keyword_extractor(settings: &ExtractorSettings) -> KeywordExtractor {
    let capability: Arc<dyn PhraseExtractor> = match settings.kind {
        ExtractorKind::KeyPhrase => match load_key_phrase_extractor(settings) {
            Ok(extractor) => {
                info!("Creating key-phrase keyword extractor");
                Arc::new(extractor)
            }
            Err(err) => {
                warn!(
                    "Could not load key-phrase extractor ({}), using simple fallback",
                    err
                );
                Arc::new(SimpleSplitExtractor)
            }
        },
        ExtractorKind::Simple => {
            info!("Creating simple keyword extractor");
            Arc::new(SimpleSplitExtractor)
        }
    };
    KeywordExtractor::new(capability)
}

fn load_key_phrase_extractor(
    settings: &ExtractorSettings,
) -> Result<KeyPhraseExtractor, super::ExtractionError> {
    let extractor = KeyPhraseExtractor::new(settings.max_input_chars);
    match &settings.stop_words_path {
        Some(path) => extractor.with_stop_words_file(path),
        None => Ok(extractor),
    }
}
