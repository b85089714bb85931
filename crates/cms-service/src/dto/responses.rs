//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Offset-paginated page envelope
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    /// Total matching items, ignoring pagination
    pub count: i64,
    /// Query string for the next page, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Query string for the previous page, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Build a page envelope from a result window.
    /// `next`/`previous` are relative query strings over limit/offset.
    pub fn new(count: i64, results: Vec<T>, limit: i64, offset: i64) -> Self {
        let next = if offset + limit < count {
            Some(format!("?limit={}&offset={}", limit, offset + limit))
        } else {
            None
        };
        let previous = if offset > 0 {
            Some(format!("?limit={}&offset={}", limit, (offset - limit).max(0)))
        } else {
            None
        };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_superuser: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public user response (for article authors)
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

// ============================================================================
// Category Responses
// ============================================================================

/// Category response with published article count
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub articles_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact category reference embedded in article responses
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Article Responses
// ============================================================================

/// Full article response, including content
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: CategorySummary,
    pub author: PublicUserResponse,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article listing entry (content omitted)
#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummaryResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: CategorySummary,
    pub author: PublicUserResponse,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Scraper Responses
// ============================================================================

/// A stored scraped article
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedArticleResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}

/// Per-source outcome of a scrape run
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeSourceResult {
    pub source: String,
    /// Entries extracted from the page
    pub fetched: usize,
    /// Entries that were new and stored
    pub stored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry encountered during a scrape run
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedEntryResponse {
    pub title: String,
    pub url: String,
    pub source: String,
    /// Whether this URL was stored for the first time by this run
    pub is_new: bool,
}

/// Result of a scrape run across all sources
#[derive(Debug, Serialize)]
pub struct ScrapeRunResponse {
    pub total_fetched: usize,
    pub total_stored: usize,
    pub sources: Vec<ScrapeSourceResult>,
    /// Every entry encountered, both new and already known
    pub articles: Vec<ScrapedEntryResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        let status = if database { "ready" } else { "degraded" };
        Self {
            status: status.to_string(),
            database,
        }
    }
}
