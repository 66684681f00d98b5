//! Request handling for the news pages
//!
//! [`NewsSite`] is what routing would dispatch to: it resolves records through
//! a [`Store`], runs moderation before anything is saved, and gates comment
//! edits and deletions with [`CommentAccessPolicy`]. A request from someone
//! who is not the comment's author gets [`Response::NotFound`], exactly as if
//! the comment did not exist.
//!
//! # Example
//!
//! ```ignore
//! let site = NewsSite::new(MemoryStore::new(), Config::default());
//! let response = site.post_comment(news.id, Some(&actor), &CommentForm::new("Hi"))?;
//! assert_eq!(response.location(), Some("/news/1/#comments"));
//! ```

mod response;
pub mod urls;

pub use response::{DetailPage, HomePage, Response};

use crate::actor::Actor;
use crate::comment::{
    CommentAccessPolicy, CommentBuilder, CommentFilter, CommentForm, CommentThreadQuery,
    ModerationFilter,
};
use crate::config::Config;
use crate::error::Result;
use crate::news::NewsFeedQuery;
use crate::store::Store;
use crate::types::{CommentId, NewsId};
use std::sync::Arc;
use tracing::{debug, info};

/// News pages backed by a store
pub struct NewsSite {
    store: Arc<dyn Store>,
    config: Config,
    filter: ModerationFilter,
}

impl NewsSite {
    /// Create a site over the given store
    pub fn new(store: impl Store + 'static, config: Config) -> Self {
        Self::with_store(Arc::new(store), config)
    }

    /// Create a site over shared storage
    pub fn with_store(store: Arc<dyn Store>, config: Config) -> Self {
        let filter = ModerationFilter::from_config(&config.moderation);
        Self {
            store,
            config,
            filter,
        }
    }

    /// Home page: the most recent news, capped at the page size
    pub fn home(&self) -> Result<HomePage> {
        let all_news = self.store.list_news()?;
        Ok(HomePage {
            object_list: NewsFeedQuery::list_recent(&all_news, self.config.feed.page_size),
        })
    }

    /// Detail page of one news item
    pub fn detail(&self, news_id: NewsId, actor: Option<&Actor>) -> Result<DetailPage> {
        let news = self.store.get_news(news_id)?;
        let comments = self.store.list_comments(&CommentFilter::for_news(news_id))?;

        Ok(DetailPage {
            news,
            comments: CommentThreadQuery::list_for_news(news_id, &comments),
            form: actor.map(|_| CommentForm::default()),
        })
    }

    /// Submit a comment on a news item
    pub fn post_comment(
        &self,
        news_id: NewsId,
        actor: Option<&Actor>,
        form: &CommentForm,
    ) -> Result<Response> {
        let Some(actor) = actor else {
            debug!("Anonymous comment on news {} redirected to login", news_id);
            return Ok(Response::redirect(urls::login(&urls::detail(news_id))));
        };

        if let Err(err) = self.store.get_news(news_id) {
            return not_found_or(err);
        }

        let text = match form.clean(&self.config.moderation, &self.filter) {
            Ok(text) => text,
            Err(errors) => {
                info!("Rejected comment by {} on news {}: {}", actor.username, news_id, errors);
                return Ok(Response::FormInvalid { errors });
            }
        };

        let comment = self
            .store
            .create_comment(CommentBuilder::new(news_id, actor.id).text(text).build()?)?;
        info!("{} commented on news {} ({})", actor.username, news_id, comment.id);

        Ok(Response::redirect(urls::comments(news_id)))
    }

    /// Replace the text of a comment
    pub fn edit_comment(
        &self,
        comment_id: CommentId,
        actor: Option<&Actor>,
        form: &CommentForm,
    ) -> Result<Response> {
        let Some(actor) = actor else {
            return Ok(Response::redirect(urls::login(&urls::edit(comment_id))));
        };

        let mut comment = match self.store.get_comment(comment_id) {
            Ok(comment) => comment,
            Err(err) => return not_found_or(err),
        };

        if !CommentAccessPolicy::can_mutate(actor, &comment) {
            debug!("{} may not edit comment {}", actor.username, comment_id);
            return Ok(Response::NotFound);
        }

        let text = match form.clean(&self.config.moderation, &self.filter) {
            Ok(text) => text,
            Err(errors) => return Ok(Response::FormInvalid { errors }),
        };

        comment.update_text(text);
        self.store.update_comment(&comment)?;
        info!("{} edited comment {}", actor.username, comment_id);

        Ok(Response::redirect(urls::comments(comment.news_id)))
    }

    /// Remove a comment
    pub fn delete_comment(&self, comment_id: CommentId, actor: Option<&Actor>) -> Result<Response> {
        let Some(actor) = actor else {
            return Ok(Response::redirect(urls::login(&urls::delete(comment_id))));
        };

        let comment = match self.store.get_comment(comment_id) {
            Ok(comment) => comment,
            Err(err) => return not_found_or(err),
        };

        if !CommentAccessPolicy::can_mutate(actor, &comment) {
            debug!("{} may not delete comment {}", actor.username, comment_id);
            return Ok(Response::NotFound);
        }

        self.store.delete_comment(comment_id)?;
        info!("{} deleted comment {}", actor.username, comment_id);

        Ok(Response::redirect(urls::comments(comment.news_id)))
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying storage
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}

fn not_found_or(err: crate::NewsboardError) -> Result<Response> {
    if err.is_not_found() {
        Ok(Response::NotFound)
    } else {
        Err(err)
    }
}
