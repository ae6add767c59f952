//! Keyword extraction from free-text prompts.
//!
//! A [`KeywordExtractor`] wraps one [`PhraseExtractor`] capability chosen at
//! startup and degrades to [`SimpleSplitExtractor`] whenever that capability
//! fails on a given input.

mod extractor;
mod factory;
mod key_phrase;
mod keyword_set;
mod simple_split;
mod stop_words;

pub use extractor::{ExtractionError, KeywordExtractor, PhraseExtractor};
pub use factory::{create_keyword_extractor, ExtractorKind, ExtractorSettings};
pub use key_phrase::KeyPhraseExtractor;
pub use keyword_set::{KeywordSet, MAX_KEYWORDS, NEUTRAL_MOOD, PLACEHOLDER_MOOD};
pub use simple_split::SimpleSplitExtractor;
pub use stop_words::ENGLISH_STOP_WORDS;
