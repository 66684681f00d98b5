//! News data models

use crate::types::NewsId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A published news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Store-assigned identifier
    pub id: NewsId,
    /// Headline
    pub title: String,
    /// Body text
    pub text: String,
    /// Publication date
    pub date: NaiveDate,
}

/// A news item not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
    /// Headline
    pub title: String,
    /// Body text
    pub text: String,
    /// Publication date
    pub date: NaiveDate,
}

impl NewNews {
    /// Attach the id the store assigned
    pub fn into_news(self, id: NewsId) -> NewsItem {
        NewsItem {
            id,
            title: self.title,
            text: self.text,
            date: self.date,
        }
    }
}
