//! Home page feed query

use super::model::NewsItem;

/// Most recent news first, capped at a page size
pub struct NewsFeedQuery;

impl NewsFeedQuery {
    /// Sort by date descending and keep at most `limit` items.
    ///
    /// Items sharing a date keep their input order.
    pub fn list_recent(all_news: &[NewsItem], limit: usize) -> Vec<NewsItem> {
        let mut news: Vec<&NewsItem> = all_news.iter().collect();
        news.sort_by(|a, b| b.date.cmp(&a.date));
        news.into_iter().take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewsId;
    use chrono::{Duration, Local, NaiveDate};
    use pretty_assertions::assert_eq;

    fn all_news(count: usize) -> Vec<NewsItem> {
        let today = Local::now().date_naive();
        (0..count)
            .map(|index| NewsItem {
                id: NewsId(index as u64 + 1),
                title: format!("Новость {}", index),
                text: "Просто текст.".to_string(),
                date: today - Duration::days(index as i64),
            })
            .collect()
    }

    #[test]
    fn test_news_count_capped() {
        for extra in [0, 1, 5] {
            let news = all_news(10 + extra);
            assert_eq!(NewsFeedQuery::list_recent(&news, 10).len(), 10);
        }
    }

    #[test]
    fn test_fewer_than_limit() {
        let news = all_news(3);
        assert_eq!(NewsFeedQuery::list_recent(&news, 10).len(), 3);
        assert!(NewsFeedQuery::list_recent(&[], 10).is_empty());
    }

    #[test]
    fn test_news_order() {
        let mut news = all_news(11);
        news.reverse();

        let listed = NewsFeedQuery::list_recent(&news, 10);
        let dates: Vec<NaiveDate> = listed.iter().map(|n| n.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);

        // The oldest item is the one cut off
        assert!(listed.iter().all(|n| n.id != NewsId(11)));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let news: Vec<NewsItem> = [3, 1, 2]
            .iter()
            .map(|&id| NewsItem {
                id: NewsId(id),
                title: "t".to_string(),
                text: "x".to_string(),
                date,
            })
            .collect();

        let ids: Vec<NewsId> = NewsFeedQuery::list_recent(&news, 10)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![NewsId(3), NewsId(1), NewsId(2)]);
    }

    #[test]
    fn test_input_not_mutated() {
        let news = all_news(4);
        let before = news.clone();
        let _ = NewsFeedQuery::list_recent(&news, 2);
        assert_eq!(news, before);
    }
}
