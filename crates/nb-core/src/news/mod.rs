//! News module
//!
//! News items and the home page feed query.

pub mod builder;
pub mod feed;
pub mod model;

pub use builder::NewsBuilder;
pub use feed::NewsFeedQuery;
pub use model::NewsItem;
