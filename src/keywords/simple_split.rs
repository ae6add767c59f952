use super::extractor::{ExtractionError, PhraseExtractor};

/// Words of this many characters or fewer are skipped.
const MIN_WORD_CHARS: usize = 3;

/// Deterministic fallback: the first long-enough lower-cased words, in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleSplitExtractor;

impl SimpleSplitExtractor {
    pub fn split(&self, text: &str, top_n: usize) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|word| word.chars().count() > MIN_WORD_CHARS)
            .take(top_n)
            .map(str::to_string)
            .collect()
    }
}

impl PhraseExtractor for SimpleSplitExtractor {
    fn name(&self) -> &str {
        "simple"
    }

    fn extract_phrases(&self, text: &str, top_n: usize) -> Result<Vec<String>, ExtractionError> {
        Ok(self.split(text, top_n))
    }
}
