//! Keyword extractor trait and the degrading wrapper used by the pipeline.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::keyword_set::{KeywordSet, MAX_KEYWORDS, PLACEHOLDER_MOOD};
use super::simple_split::SimpleSplitExtractor;
use crate::server::metrics::record_keyword_extraction;

/// Errors a phrase extraction capability can report for a single input.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Input too long: {len} chars (max {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("Extraction unavailable: {0}")]
    Unavailable(String),
}

/// A capability that maps free text to ranked key phrases.
///
/// Implementations are built once at startup and shared across requests, so
/// they must be usable concurrently through `&self`.
pub trait PhraseExtractor: Send + Sync {
    /// Short name used in logs (e.g. "keyphrase", "simple").
    fn name(&self) -> &str;

    /// Returns up to `top_n` phrases, most relevant first.
    fn extract_phrases(&self, text: &str, top_n: usize) -> Result<Vec<String>, ExtractionError>;
}

/// Turns prompts into [`KeywordSet`]s. Never fails.
pub struct KeywordExtractor {
    capability: Arc<dyn PhraseExtractor>,
    degraded: SimpleSplitExtractor,
}

impl KeywordExtractor {
    pub fn new(capability: Arc<dyn PhraseExtractor>) -> Self {
        Self {
            capability,
            degraded: SimpleSplitExtractor,
        }
    }

    /// Name of the capability selected at startup.
    pub fn capability_name(&self) -> &str {
        self.capability.name()
    }

    pub fn extract(&self, text: &str) -> KeywordSet {
        if text.is_empty() {
            record_keyword_extraction("empty");
            return KeywordSet::neutral();
        }

        let phrases = match self.capability.extract_phrases(text, MAX_KEYWORDS) {
            Ok(phrases) => {
                record_keyword_extraction("preferred");
                phrases
            }
            Err(err) => {
                warn!(
                    "Keyword extraction with {} failed ({}), using simple split",
                    self.capability.name(),
                    err
                );
                record_keyword_extraction("degraded");
                self.degraded.split(text, MAX_KEYWORDS)
            }
        };

        debug!("Extracted keywords {:?} from {:?}", phrases, text);
        KeywordSet::new(phrases, PLACEHOLDER_MOOD)
    }
}
