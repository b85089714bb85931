//! Scraped article entity - externally discovered content

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Read-only record of an article discovered by the scraper.
/// The URL is the sole deduplication key across scrape runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedArticle {
    pub id: Snowflake,
    pub title: String,
    pub url: String,
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}

impl ScrapedArticle {
    pub fn new(id: Snowflake, title: String, url: String, source: String) -> Self {
        Self {
            id,
            title,
            url,
            source,
            scraped_at: Utc::now(),
        }
    }
}
