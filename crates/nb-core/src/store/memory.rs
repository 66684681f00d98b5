//! In-memory store

use super::data::StoreData;
use super::Store;
use crate::actor::Actor;
use crate::comment::{Comment, CommentFilter, NewComment};
use crate::error::Result;
use crate::news::model::{NewNews, NewsItem};
use crate::types::{ActorId, CommentId, NewsId};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records
    pub fn from_data(data: StoreData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Copy out the current records
    pub fn snapshot(&self) -> StoreData {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    fn create_actor(&self, actor: Actor) -> Result<Actor> {
        self.write().create_actor(actor)
    }

    fn get_actor(&self, id: &ActorId) -> Result<Actor> {
        self.read().get_actor(id)
    }

    fn find_actor(&self, username: &str) -> Result<Option<Actor>> {
        Ok(self.read().find_actor(username))
    }

    fn list_actors(&self) -> Result<Vec<Actor>> {
        Ok(self.read().actors.clone())
    }

    fn create_news(&self, news: NewNews) -> Result<NewsItem> {
        let item = self.write().create_news(news);
        debug!("Created news {}", item.id);
        Ok(item)
    }

    fn get_news(&self, id: NewsId) -> Result<NewsItem> {
        self.read().get_news(id)
    }

    fn list_news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.read().news.clone())
    }

    fn delete_news(&self, id: NewsId) -> Result<usize> {
        self.write().delete_news(id)
    }

    fn create_comment(&self, comment: NewComment) -> Result<Comment> {
        let comment = self.write().create_comment(comment)?;
        debug!("Created comment {} on news {}", comment.id, comment.news_id);
        Ok(comment)
    }

    fn get_comment(&self, id: CommentId) -> Result<Comment> {
        self.read().get_comment(id)
    }

    fn list_comments(&self, filter: &CommentFilter) -> Result<Vec<Comment>> {
        Ok(self.read().list_comments(filter))
    }

    fn update_comment(&self, comment: &Comment) -> Result<()> {
        self.write().update_comment(comment)
    }

    fn delete_comment(&self, id: CommentId) -> Result<Comment> {
        self.write().delete_comment(id)
    }
}
