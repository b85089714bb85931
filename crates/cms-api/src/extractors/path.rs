//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use cms_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with article_id
#[derive(Debug, serde::Deserialize)]
pub struct ArticleIdPath {
    pub article_id: String,
}

impl ArticleIdPath {
    /// Parse article_id as Snowflake
    pub fn article_id(&self) -> Result<Snowflake, ApiError> {
        self.article_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid article_id format"))
    }
}

/// Path parameters with category_id
#[derive(Debug, serde::Deserialize)]
pub struct CategoryIdPath {
    pub category_id: String,
}

impl CategoryIdPath {
    /// Parse category_id as Snowflake
    pub fn category_id(&self) -> Result<Snowflake, ApiError> {
        self.category_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid category_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
