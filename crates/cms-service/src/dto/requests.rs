//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Requested role: "admin" or "author" (defaults to author)
    pub role: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub old_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user's profile
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    /// Image URL or null to leave unchanged
    pub profile_image: Option<String>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Article Requests
// ============================================================================

/// Create article request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    /// Category ID (Snowflake as string)
    pub category_id: String,

    /// Article status: "draft" or "published" (defaults to draft)
    pub status: Option<String>,

    pub featured_image: Option<String>,
}

/// Update article request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,

    /// Category ID (Snowflake as string)
    pub category_id: Option<String>,

    /// Article status: "draft" or "published"
    pub status: Option<String>,

    pub featured_image: Option<String>,
}

// ============================================================================
// Scraper Requests
// ============================================================================

/// Scrape run parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRunRequest {
    /// Overall cap on entries processed across all sources
    pub limit: Option<usize>,
}

/// Article list filters, taken from query parameters.
///
/// `ordering` accepts a column name with an optional `-` prefix for
/// descending order, e.g. `-created_at` or `views_count`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ArticleFilterRequest {
    pub search: Option<String>,
    /// Category ID (Snowflake as string)
    pub category: Option<String>,
    /// Author ID (Snowflake as string)
    pub author: Option<String>,
    /// "draft" or "published"
    pub status: Option<String>,
    /// ISO 8601 timestamp lower bound on creation time
    pub created_after: Option<String>,
    /// ISO 8601 timestamp upper bound on creation time
    pub created_before: Option<String>,
    pub ordering: Option<String>,
}
