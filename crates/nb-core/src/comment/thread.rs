//! Comment thread ordering

use super::model::Comment;
use crate::types::NewsId;

/// Comments of one news item, earliest first
pub struct CommentThreadQuery;

impl CommentThreadQuery {
    /// Filter to `news_id` and sort by creation time, ties by id
    pub fn list_for_news(news_id: NewsId, all_comments: &[Comment]) -> Vec<Comment> {
        let mut comments: Vec<Comment> = all_comments
            .iter()
            .filter(|c| c.news_id == news_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActorId, CommentId};
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn comment(id: u64, news_id: u64, offset_days: i64) -> Comment {
        Comment {
            id: CommentId(id),
            news_id: NewsId(news_id),
            author_id: ActorId::new(),
            text: format!("Текст комментария {}", id),
            created_at: Utc::now() + Duration::days(offset_days),
        }
    }

    #[test]
    fn test_comments_order() {
        let comments = vec![comment(1, 1, 2), comment(2, 1, 0), comment(3, 1, 1)];

        let thread = CommentThreadQuery::list_for_news(NewsId(1), &comments);
        for pair in thread.windows(2) {
            assert!(pair[0].created_at < pair[1].created_at);
        }
        let ids: Vec<CommentId> = thread.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CommentId(2), CommentId(3), CommentId(1)]);
    }

    #[test]
    fn test_filters_other_news() {
        let comments = vec![comment(1, 1, 0), comment(2, 2, 0), comment(3, 1, 1)];

        let thread = CommentThreadQuery::list_for_news(NewsId(1), &comments);
        assert_eq!(thread.len(), 2);
        assert!(thread.iter().all(|c| c.news_id == NewsId(1)));
        assert!(CommentThreadQuery::list_for_news(NewsId(9), &comments).is_empty());
    }

    #[test]
    fn test_ties_broken_by_id() {
        let when = Utc::now();
        let mut first = comment(2, 1, 0);
        let mut second = comment(1, 1, 0);
        first.created_at = when;
        second.created_at = when;

        let thread = CommentThreadQuery::list_for_news(NewsId(1), &[first, second]);
        assert_eq!(thread[0].id, CommentId(1));
        assert_eq!(thread[1].id, CommentId(2));
    }
}
