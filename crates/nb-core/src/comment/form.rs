//! Comment submission form

use super::moderation::ModerationFilter;
use crate::config::ModerationConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message for a missing required field
pub const REQUIRED: &str = "This field is required.";

/// Name of the only form field
pub const TEXT_FIELD: &str = "text";

/// Submitted comment data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    /// Comment text
    pub text: String,
}

impl CommentForm {
    /// Create form data with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Validate and return the cleaned text.
    ///
    /// Required and length checks run before moderation; all failures are
    /// reported against the `text` field.
    pub fn clean(
        &self,
        config: &ModerationConfig,
        filter: &ModerationFilter,
    ) -> std::result::Result<String, FormErrors> {
        let mut errors = FormErrors::default();

        if self.text.trim().is_empty() {
            errors.add(TEXT_FIELD, REQUIRED);
            return Err(errors);
        }

        let length = self.text.chars().count();
        if length > config.max_comment_length {
            errors.add(
                TEXT_FIELD,
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    config.max_comment_length, length
                ),
            );
        }

        if let Err(rejected) = filter.check(&self.text) {
            errors.add(TEXT_FIELD, rejected.reason);
        }

        if errors.is_empty() {
            Ok(self.text.clone())
        } else {
            Err(errors)
        }
    }
}

/// Validation errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    /// Record an error on a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Errors recorded on a field
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a field carries the given message
    pub fn has_error(&self, field: &str, message: &str) -> bool {
        self.field(field).iter().any(|m| m == message)
    }

    /// No errors recorded
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, messages)`
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.fields.iter()
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BAD_WORDS, WARNING};

    fn clean(text: &str) -> std::result::Result<String, FormErrors> {
        let config = ModerationConfig::default();
        let filter = ModerationFilter::from_config(&config);
        CommentForm::new(text).clean(&config, &filter)
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(clean("Текст комментария").unwrap(), "Текст комментария");
    }

    #[test]
    fn test_required() {
        let errors = clean("   ").unwrap_err();
        assert!(errors.has_error(TEXT_FIELD, REQUIRED));
        assert_eq!(errors.field(TEXT_FIELD).len(), 1);
    }

    #[test]
    fn test_bad_words_error_on_text_field() {
        let errors = clean(&format!("Какой-то текст, {}, еще текст", BAD_WORDS[1])).unwrap_err();
        assert!(errors.has_error(TEXT_FIELD, WARNING));
        assert_eq!(errors.to_string(), format!("text: {}", WARNING));
    }

    #[test]
    fn test_too_long() {
        let config = ModerationConfig {
            max_comment_length: 5,
            ..ModerationConfig::default()
        };
        let filter = ModerationFilter::from_config(&config);
        let errors = CommentForm::new("слишком длинно").clean(&config, &filter).unwrap_err();
        assert_eq!(errors.field(TEXT_FIELD).len(), 1);
        assert!(errors.field("title").is_empty());
    }
}
