//! Comment builder for fluent API

use super::model::NewComment;
use crate::error::{NewsboardError, Result};
use crate::types::{ActorId, NewsId};
use chrono::{DateTime, Utc};

/// Builder for creating comments with fluent API
pub struct CommentBuilder {
    news_id: NewsId,
    author_id: ActorId,
    text: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    /// Create a new builder for a comment on a news item
    pub fn new(news_id: NewsId, author_id: ActorId) -> Self {
        Self {
            news_id,
            author_id,
            text: None,
            created_at: None,
        }
    }

    /// Set the comment text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Override the creation time (defaults to now)
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the unsaved comment
    pub fn build(self) -> Result<NewComment> {
        let text = self.text.ok_or_else(|| {
            NewsboardError::Validation("Comment text is required".to_string())
        })?;

        if text.trim().is_empty() {
            return Err(NewsboardError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        Ok(NewComment {
            news_id: self.news_id,
            author_id: self.author_id,
            text,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_basic_builder() {
        let author = ActorId::new();
        let comment = CommentBuilder::new(NewsId(1), author)
            .text("Текст комментария")
            .build()
            .unwrap();

        assert_eq!(comment.text, "Текст комментария");
        assert_eq!(comment.author_id, author);
        assert_eq!(comment.news_id, NewsId(1));
    }

    #[test]
    fn test_builder_with_created_at() {
        let when = Utc::now() + Duration::days(1);
        let comment = CommentBuilder::new(NewsId(1), ActorId::new())
            .text("later")
            .created_at(when)
            .build()
            .unwrap();

        assert_eq!(comment.created_at, when);
    }

    #[test]
    fn test_builder_without_text_fails() {
        let result = CommentBuilder::new(NewsId(1), ActorId::new()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_empty_text_fails() {
        let result = CommentBuilder::new(NewsId(1), ActorId::new())
            .text("   ")
            .build();
        assert!(result.is_err());
    }
}
