//! Banned word moderation

use crate::config::{ModerationConfig, WARNING};
use std::fmt;
use tracing::debug;

/// Rejection produced by [`ModerationFilter::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// The banned word that matched
    pub word: String,
    /// User-facing warning
    pub reason: String,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for Rejected {}

/// Rejects text containing any configured banned substring.
///
/// Matching is case-sensitive. Empty words are ignored, so an empty word list
/// accepts everything.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    banned_words: Vec<String>,
    warning: String,
}

impl ModerationFilter {
    /// Create a filter with the default warning
    pub fn new(banned_words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::with_warning(banned_words, WARNING)
    }

    /// Create a filter with a custom warning
    pub fn with_warning(
        banned_words: impl IntoIterator<Item = impl Into<String>>,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            banned_words: banned_words
                .into_iter()
                .map(Into::<String>::into)
                .filter(|w: &String| !w.is_empty())
                .collect(),
            warning: warning.into(),
        }
    }

    /// Build from the moderation section of the config
    pub fn from_config(config: &ModerationConfig) -> Self {
        Self::with_warning(config.banned_words.iter().cloned(), config.warning.clone())
    }

    /// Return the text unchanged, or the warning if it contains a banned word
    pub fn check<'a>(&self, text: &'a str) -> std::result::Result<&'a str, Rejected> {
        match self.banned_words.iter().find(|word| text.contains(word.as_str())) {
            Some(word) => {
                debug!(word = %word, "Comment text rejected by moderation");
                Err(Rejected {
                    word: word.clone(),
                    reason: self.warning.clone(),
                })
            }
            None => Ok(text),
        }
    }

    /// Configured words
    pub fn banned_words(&self) -> &[String] {
        &self.banned_words
    }

    /// Warning returned on rejection
    pub fn warning(&self) -> &str {
        &self.warning
    }
}

impl Default for ModerationFilter {
    fn default() -> Self {
        Self::from_config(&ModerationConfig::default())
    }
}
