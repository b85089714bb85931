//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique within this run and across reruns against the
/// same database (usernames, emails, and slugs are all unique columns)
pub fn unique_suffix() -> u64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    secs * 1_000_000 + COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

impl RegisterRequest {
    /// A unique author account
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("author{suffix}"),
            email: format!("author{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            role: None,
        }
    }

    /// A unique admin account
    pub fn unique_admin() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("admin{suffix}"),
            email: format!("admin{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            role: Some("admin".to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current user response (includes email)
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_superuser: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Category {suffix}"),
            description: Some("A test category".to_string()),
        }
    }
}

/// Update category request
#[derive(Debug, Default, Serialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub articles_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Create article request
#[derive(Debug, Serialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub category_id: String,
    pub status: Option<String>,
    pub featured_image: Option<String>,
}

impl CreateArticleRequest {
    /// A unique draft article in the given category
    pub fn draft(category_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Draft Article {suffix}"),
            description: Some("A draft".to_string()),
            content: "Draft body".to_string(),
            category_id: category_id.to_string(),
            status: None,
            featured_image: None,
        }
    }

    /// A unique published article in the given category
    pub fn published(category_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Published Article {suffix}"),
            description: Some("A published article".to_string()),
            content: "Published body".to_string(),
            category_id: category_id.to_string(),
            status: Some("published".to_string()),
            featured_image: None,
        }
    }
}

/// Update article request
#[derive(Debug, Default, Serialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
    pub featured_image: Option<String>,
}

/// Compact category reference embedded in article responses
#[derive(Debug, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Full article response
#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: CategorySummary,
    pub author: PublicUserResponse,
    pub status: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Article listing entry (no content field)
#[derive(Debug, Deserialize)]
pub struct ArticleSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: CategorySummary,
    pub author: PublicUserResponse,
    pub status: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Stored scraped article
#[derive(Debug, Deserialize)]
pub struct ScrapedArticleResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub scraped_at: String,
}

/// Result of a scrape run
#[derive(Debug, Deserialize)]
pub struct ScrapeRunResponse {
    pub total_fetched: usize,
    pub total_stored: usize,
    pub sources: Vec<ScrapeSourceResult>,
    pub articles: Vec<ScrapedEntryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ScrapedEntryResponse {
    pub title: String,
    pub url: String,
    pub source: String,
    pub is_new: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeSourceResult {
    pub source: String,
    pub fetched: usize,
    pub stored: usize,
    #[serde(default)]
    pub error: Option<String>,
}

/// Paginated page envelope
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
