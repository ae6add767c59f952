use serde::Serialize;

/// Maximum number of phrases kept for a single prompt.
pub const MAX_KEYWORDS: usize = 2;

/// Mood reported for an empty prompt.
pub const NEUTRAL_MOOD: &str = "neutral";

/// Mood reported for every non-empty prompt until a real classifier exists.
pub const PLACEHOLDER_MOOD: &str = "calm";

/// Ordered key phrases extracted from a prompt, best first, plus a mood tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    phrases: Vec<String>,
    mood: String,
}

impl KeywordSet {
    /// Builds a set from extracted phrases, keeping at most [`MAX_KEYWORDS`].
    pub fn new(mut phrases: Vec<String>, mood: &str) -> Self {
        phrases.truncate(MAX_KEYWORDS);
        Self {
            phrases,
            mood: mood.to_string(),
        }
    }

    /// The set produced for an empty prompt.
    pub fn neutral() -> Self {
        Self::new(Vec::new(), NEUTRAL_MOOD)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn first(&self) -> Option<&str> {
        self.phrases.first().map(String::as_str)
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
