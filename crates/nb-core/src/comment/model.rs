//! Comment data models

use crate::types::{ActorId, CommentId, NewsId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reader comment attached to a news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identifier
    pub id: CommentId,
    /// News item this comment belongs to
    pub news_id: NewsId,
    /// Author of the comment
    pub author_id: ActorId,
    /// Comment text
    pub text: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Replace the text
    pub fn update_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// A comment not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// News item this comment belongs to
    pub news_id: NewsId,
    /// Author of the comment
    pub author_id: ActorId,
    /// Comment text
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Attach the id the store assigned
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            news_id: self.news_id,
            author_id: self.author_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

/// Filter over stored comments
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    /// Only comments on this news item
    pub news_id: Option<NewsId>,
    /// Only comments by this author
    pub author_id: Option<ActorId>,
}

impl CommentFilter {
    /// Match every comment
    pub fn all() -> Self {
        Self::default()
    }

    /// Match comments on one news item
    pub fn for_news(news_id: NewsId) -> Self {
        Self {
            news_id: Some(news_id),
            ..Self::default()
        }
    }

    /// Restrict to one author
    pub fn by_author(mut self, author_id: ActorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Check if a comment matches
    pub fn matches(&self, comment: &Comment) -> bool {
        self.news_id.map_or(true, |id| comment.news_id == id)
            && self.author_id.map_or(true, |id| comment.author_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment(news_id: u64, author_id: ActorId) -> Comment {
        NewComment {
            news_id: NewsId(news_id),
            author_id,
            text: "Текст комментария".to_string(),
            created_at: Utc::now(),
        }
        .into_comment(CommentId(1))
    }

    #[test]
    fn test_comment_update() {
        let mut comment = create_test_comment(1, ActorId::new());
        comment.update_text("Новый текст");
        assert_eq!(comment.text, "Новый текст");
    }

    #[test]
    fn test_filter_matches() {
        let author = ActorId::new();
        let comment = create_test_comment(1, author);

        assert!(CommentFilter::all().matches(&comment));
        assert!(CommentFilter::for_news(NewsId(1)).matches(&comment));
        assert!(!CommentFilter::for_news(NewsId(2)).matches(&comment));
        assert!(CommentFilter::for_news(NewsId(1)).by_author(author).matches(&comment));
        assert!(!CommentFilter::all().by_author(ActorId::new()).matches(&comment));
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment(3, ActorId::new());
        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }
}
