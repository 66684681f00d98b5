//! News builder for fluent API

use super::model::NewNews;
use crate::error::{NewsboardError, Result};
use chrono::{Local, NaiveDate};

/// Builder for creating news items with fluent API
#[derive(Debug, Default)]
pub struct NewsBuilder {
    title: Option<String>,
    text: Option<String>,
    date: Option<NaiveDate>,
}

impl NewsBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headline
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the publication date (defaults to today)
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Build the unsaved news item
    pub fn build(self) -> Result<NewNews> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NewsboardError::Validation("News title is required".to_string()))?;
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| NewsboardError::Validation("News text is required".to_string()))?;

        Ok(NewNews {
            title,
            text,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_builder() {
        let news = NewsBuilder::new()
            .title("Заголовок")
            .text("Текст новости")
            .build()
            .unwrap();

        assert_eq!(news.title, "Заголовок");
        assert_eq!(news.date, Local::now().date_naive());
    }

    #[test]
    fn test_builder_with_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let news = NewsBuilder::new().title("t").text("x").date(date).build().unwrap();
        assert_eq!(news.date, date);
    }

    #[test]
    fn test_builder_requires_title_and_text() {
        assert!(NewsBuilder::new().text("x").build().is_err());
        assert!(NewsBuilder::new().title("t").build().is_err());
        assert!(NewsBuilder::new().title("  ").text("x").build().is_err());
    }
}
