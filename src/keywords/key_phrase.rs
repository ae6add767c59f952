//! Key-phrase extraction over 1–2 word n-grams.
//!
//! Stop words are removed first, then unigrams and bigrams are formed from
//! the remaining tokens. Each candidate is scored by the cosine similarity of
//! its term-count vector against the term-count vector of the whole prompt,
//! so phrases made of the prompt's dominant words rank first.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use super::extractor::{ExtractionError, PhraseExtractor};
use super::stop_words::ENGLISH_STOP_WORDS;

/// Tokens shorter than this are ignored.
const MIN_TOKEN_CHARS: usize = 2;

pub struct KeyPhraseExtractor {
    stop_words: HashSet<String>,
    max_input_chars: usize,
}

impl KeyPhraseExtractor {
    pub fn new(max_input_chars: usize) -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            max_input_chars,
        }
    }

    /// Adds the stop words listed in `path`, one per line. Lines starting
    /// with `#` are comments.
    pub fn with_stop_words_file(mut self, path: &Path) -> Result<Self, ExtractionError> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            ExtractionError::Unavailable(format!("cannot read stop words {:?}: {}", path, err))
        })?;
        self.stop_words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );
        Ok(self)
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|word| !self.stop_words.contains(word))
            .collect()
    }
}

fn term_counts<'a>(tokens: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, f64> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn norm(counts: &HashMap<&str, f64>) -> f64 {
    counts.values().map(|c| c * c).sum::<f64>().sqrt()
}

fn cosine(candidate: &HashMap<&str, f64>, document: &HashMap<&str, f64>, doc_norm: f64) -> f64 {
    let dot: f64 = candidate
        .iter()
        .map(|(term, count)| count * document.get(*term).copied().unwrap_or(0.0))
        .sum();
    let denominator = norm(candidate) * doc_norm;
    if denominator == 0.0 {
        0.0
    } else {
        dot / denominator
    }
}

impl PhraseExtractor for KeyPhraseExtractor {
    fn name(&self) -> &str {
        "keyphrase"
    }

    fn extract_phrases(&self, text: &str, top_n: usize) -> Result<Vec<String>, ExtractionError> {
        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(ExtractionError::InputTooLong {
                len,
                max: self.max_input_chars,
            });
        }

        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let document = term_counts(tokens.iter().map(String::as_str));
        let doc_norm = norm(&document);

        // Candidates in order of first occurrence, so the stable sort below
        // breaks ties in favour of earlier phrases.
        let mut seen = HashSet::new();
        let mut scored: Vec<(String, f64)> = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let mut grams = vec![vec![token.as_str()]];
            if let Some(next) = tokens.get(i + 1) {
                if next != token {
                    grams.push(vec![token.as_str(), next.as_str()]);
                }
            }
            for gram in grams {
                let phrase = gram.join(" ");
                if !seen.insert(phrase.clone()) {
                    continue;
                }
                let score = cosine(&term_counts(gram), &document, doc_norm);
                scored.push((phrase, score));
            }
        }

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scored
            .into_iter()
            .take(top_n)
            .map(|(phrase, _)| phrase)
            .collect())
    }
}
