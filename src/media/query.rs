use crate::keywords::KeywordSet;

/// Search string for the media providers plus its degraded retry form.
///
/// Multi-word phrases like "driving thunderstorm" often return nothing while
/// their last word ("thunderstorm") reliably does, so the last token is kept
/// as a one-shot retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    primary: String,
    fallback: Option<String>,
}

impl SearchQuery {
    pub fn build(prompt: &str, keywords: &KeywordSet) -> Self {
        let primary = keywords.first().unwrap_or(prompt).to_string();
        let fallback = if primary.contains(' ') {
            primary.split_whitespace().last().map(str::to_string)
        } else {
            None
        };
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}
