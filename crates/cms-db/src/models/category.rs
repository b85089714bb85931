//! Category database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-category published article count row
#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountModel {
    pub category_id: i64,
    pub articles_count: i64,
}
