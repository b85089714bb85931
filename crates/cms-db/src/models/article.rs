//! Article database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for articles table
#[derive(Debug, Clone, FromRow)]
pub struct ArticleModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
    pub author_id: i64,
    pub status: String,
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article row joined with its author and category.
/// Column names for the joined tables are aliased with `author_` / `category_`.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRecordRow {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
    pub author_id: i64,
    pub status: String,
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub author_username: String,
    pub author_email: String,
    pub author_role: String,
    pub author_is_superuser: bool,
    pub author_bio: Option<String>,
    pub author_profile_image: Option<String>,
    pub author_created_at: DateTime<Utc>,
    pub author_updated_at: DateTime<Utc>,

    pub category_name: String,
    pub category_slug: String,
    pub category_description: String,
    pub category_created_at: DateTime<Utc>,
    pub category_updated_at: DateTime<Utc>,
}
