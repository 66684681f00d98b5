//! URL reversal for the site routes

use crate::types::{CommentId, NewsId};

/// Anchor of the comment list on the detail page
pub const COMMENTS_ANCHOR: &str = "#comments";

pub fn home() -> String {
    "/".to_string()
}

pub fn detail(news_id: NewsId) -> String {
    format!("/news/{}/", news_id)
}

/// Detail page scrolled to its comments
pub fn comments(news_id: NewsId) -> String {
    format!("{}{}", detail(news_id), COMMENTS_ANCHOR)
}

pub fn edit(comment_id: CommentId) -> String {
    format!("/edit_comment/{}/", comment_id)
}

pub fn delete(comment_id: CommentId) -> String {
    format!("/delete_comment/{}/", comment_id)
}

/// Login page that returns to `next` afterwards
pub fn login(next: &str) -> String {
    format!("/auth/login/?next={}", next)
}
