//! nb-core - Core library for newsboard
//!
//! This crate provides the business logic behind the news pages: the home
//! page feed, comment threads, banned word moderation, and the author-only
//! rule for editing and deleting comments.

pub mod error;
pub mod types;
pub mod config;
pub mod actor;
pub mod news;
pub mod comment;
pub mod store;
pub mod site;

pub use actor::Actor;
pub use config::Config;
pub use error::{NewsboardError, Result};
pub use site::{NewsSite, Response};
pub use types::*;
