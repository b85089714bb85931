//! Error handling utilities for repositories

use cms_core::error::DomainError;
use cms_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback.
/// The violated constraint name is passed through so callers can tell
/// apart multiple unique columns on the same table.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().map(str::to_owned);
            return on_unique(constraint.as_deref());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "category not found" error
pub fn category_not_found(id: Snowflake) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create an "article not found" error
pub fn article_not_found(id: Snowflake) -> DomainError {
    DomainError::ArticleNotFound(id)
}
