//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(Snowflake),

    #[error("Article not found: {0}")]
    ArticleNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid article status: {0}")]
    InvalidStatus(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Admin privileges required")]
    AdminOnly,

    #[error("Not the article author")]
    NotArticleAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Category name already in use")]
    CategoryNameExists,

    #[error("Category slug already in use")]
    CategorySlugExists,

    #[error("Article slug already in use")]
    ArticleSlugExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Scrape error: {0}")]
    ScrapeError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::ArticleNotFound(_) => "UNKNOWN_ARTICLE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidStatus(_) => "INVALID_STATUS",

            // Authorization
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::NotArticleAuthor => "NOT_ARTICLE_AUTHOR",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CategoryNameExists => "CATEGORY_NAME_EXISTS",
            Self::CategorySlugExists => "CATEGORY_SLUG_EXISTS",
            Self::ArticleSlugExists => "ARTICLE_SLUG_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ScrapeError(_) => "SCRAPE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::CategoryNotFound(_) | Self::ArticleNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::InvalidRole(_)
                | Self::InvalidStatus(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationRequired | Self::AdminOnly | Self::NotArticleAuthor
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::CategoryNameExists
                | Self::CategorySlugExists
                | Self::ArticleSlugExists
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::AdminOnly;
        assert_eq!(err.code(), "ADMIN_ONLY");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ArticleNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CategoryNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::CategoryNameExists.is_conflict());
        assert!(DomainError::CategorySlugExists.is_conflict());
        assert!(DomainError::ArticleSlugExists.is_conflict());
        assert!(!DomainError::AdminOnly.is_conflict());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotArticleAuthor.is_authorization());
        assert!(DomainError::AdminOnly.is_authorization());
        assert!(!DomainError::UserNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ArticleNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Article not found: 123");

        let err = DomainError::WeakPassword("too short".to_string());
        assert_eq!(err.to_string(), "Password too weak: too short");
    }
}
