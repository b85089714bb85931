//! Scraped article database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for scraped_articles table
#[derive(Debug, Clone, FromRow)]
pub struct ScrapedArticleModel {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}
