//! In-memory record set shared by store implementations

use crate::actor::Actor;
use crate::comment::{Comment, CommentFilter, NewComment};
use crate::error::{NewsboardError, Result};
use crate::news::model::{NewNews, NewsItem};
use crate::types::{ActorId, CommentId, NewsId};
use serde::{Deserialize, Serialize};

/// All persisted records, kept in id order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    /// Next news id to hand out
    pub next_news_id: u64,
    /// Next comment id to hand out
    pub next_comment_id: u64,
    /// Registered actors
    #[serde(default)]
    pub actors: Vec<Actor>,
    /// News items
    #[serde(default)]
    pub news: Vec<NewsItem>,
    /// Comments
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_news_id: 1,
            next_comment_id: 1,
            actors: Vec::new(),
            news: Vec::new(),
            comments: Vec::new(),
        }
    }
}

impl StoreData {
    pub fn create_actor(&mut self, actor: Actor) -> Result<Actor> {
        if actor.username.trim().is_empty() {
            return Err(NewsboardError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }
        if self.actors.iter().any(|a| a.username == actor.username) {
            return Err(NewsboardError::Validation(format!(
                "User {} already exists",
                actor.username
            )));
        }
        self.actors.push(actor.clone());
        Ok(actor)
    }

    pub fn get_actor(&self, id: &ActorId) -> Result<Actor> {
        self.actors
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| NewsboardError::ActorNotFound(id.to_string()))
    }

    pub fn find_actor(&self, username: &str) -> Option<Actor> {
        self.actors.iter().find(|a| a.username == username).cloned()
    }

    pub fn create_news(&mut self, news: NewNews) -> NewsItem {
        let item = news.into_news(NewsId(self.next_news_id));
        self.next_news_id += 1;
        self.news.push(item.clone());
        item
    }

    pub fn get_news(&self, id: NewsId) -> Result<NewsItem> {
        self.news
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| NewsboardError::NewsNotFound(id.to_string()))
    }

    /// Remove a news item and its comments, returning how many comments went with it
    pub fn delete_news(&mut self, id: NewsId) -> Result<usize> {
        let pos = self
            .news
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NewsboardError::NewsNotFound(id.to_string()))?;
        self.news.remove(pos);

        let before = self.comments.len();
        self.comments.retain(|c| c.news_id != id);
        Ok(before - self.comments.len())
    }

    pub fn create_comment(&mut self, comment: NewComment) -> Result<Comment> {
        self.get_news(comment.news_id)?;
        self.get_actor(&comment.author_id)?;

        let comment = comment.into_comment(CommentId(self.next_comment_id));
        self.next_comment_id += 1;
        self.comments.push(comment.clone());
        Ok(comment)
    }

    pub fn get_comment(&self, id: CommentId) -> Result<Comment> {
        self.comments
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| NewsboardError::CommentNotFound(id.to_string()))
    }

    pub fn list_comments(&self, filter: &CommentFilter) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }

    /// Overwrite a stored comment; ownership fields must not change
    pub fn update_comment(&mut self, comment: &Comment) -> Result<()> {
        let stored = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or_else(|| NewsboardError::CommentNotFound(comment.id.to_string()))?;

        if stored.news_id != comment.news_id || stored.author_id != comment.author_id {
            return Err(NewsboardError::Validation(format!(
                "Comment {} cannot change news item or author",
                comment.id
            )));
        }

        *stored = comment.clone();
        Ok(())
    }

    pub fn delete_comment(&mut self, id: CommentId) -> Result<Comment> {
        let pos = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| NewsboardError::CommentNotFound(id.to_string()))?;
        Ok(self.comments.remove(pos))
    }
}
