//! Persistence interface and an in-memory implementation
//!
//! # Example
//!
//! ```ignore
//! use nb_core::store::{MemoryStore, Store};
//! use nb_core::news::NewsBuilder;
//!
//! let store = MemoryStore::new();
//! let news = store.create_news(NewsBuilder::new().title("t").text("x").build()?)?;
//! assert_eq!(store.count_comments(&CommentFilter::for_news(news.id))?, 0);
//! ```

mod data;
mod memory;

pub use data::StoreData;
pub use memory::MemoryStore;

use crate::actor::Actor;
use crate::comment::{Comment, CommentFilter, NewComment};
use crate::error::Result;
use crate::news::model::{NewNews, NewsItem};
use crate::types::{ActorId, CommentId, NewsId};

/// Trait for record storage implementations
pub trait Store: Send + Sync {
    /// Register an actor; usernames are unique
    fn create_actor(&self, actor: Actor) -> Result<Actor>;

    /// Load an actor by ID
    fn get_actor(&self, id: &ActorId) -> Result<Actor>;

    /// Look up an actor by username
    fn find_actor(&self, username: &str) -> Result<Option<Actor>>;

    /// List all actors
    fn list_actors(&self) -> Result<Vec<Actor>>;

    /// Persist a news item and assign its ID
    fn create_news(&self, news: NewNews) -> Result<NewsItem>;

    /// Load a news item by ID
    fn get_news(&self, id: NewsId) -> Result<NewsItem>;

    /// List all news items in ID order
    fn list_news(&self) -> Result<Vec<NewsItem>>;

    /// Delete a news item and its comments; returns the number of comments removed
    fn delete_news(&self, id: NewsId) -> Result<usize>;

    /// Persist a comment and assign its ID
    fn create_comment(&self, comment: NewComment) -> Result<Comment>;

    /// Load a comment by ID
    fn get_comment(&self, id: CommentId) -> Result<Comment>;

    /// List matching comments in ID order
    fn list_comments(&self, filter: &CommentFilter) -> Result<Vec<Comment>>;

    /// Save changes to an existing comment
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    /// Delete a comment
    fn delete_comment(&self, id: CommentId) -> Result<Comment>;

    /// Count matching comments
    fn count_comments(&self, filter: &CommentFilter) -> Result<usize> {
        Ok(self.list_comments(filter)?.len())
    }
}
