//! Pagination extractor
//!
//! Extracts offset-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of items to skip
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Maximum number of items to return (clamped to 1-100)
    pub limit: i64,
    /// Number of items to skip (never negative)
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Create pagination with only a limit
    pub fn with_limit(limit: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: 0,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: params.offset.unwrap_or(0).max(0),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_limit_clamping() {
        let pagination = Pagination::with_limit(200);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = Pagination::with_limit(0);
        assert_eq!(pagination.limit, 1);
    }

    #[test]
    fn test_pagination_from_params() {
        let params = PaginationParams {
            limit: Some(25),
            offset: Some(50),
        };

        let pagination = Pagination::from(params);
        assert_eq!(pagination.limit, 25);
        assert_eq!(pagination.offset, 50);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let params = PaginationParams {
            limit: None,
            offset: Some(-10),
        };

        let pagination = Pagination::from(params);
        assert_eq!(pagination.offset, 0);
    }
}
