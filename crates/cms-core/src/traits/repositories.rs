//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::access::ArticleScope;
use crate::entities::{Article, Category, ScrapedArticle, User};
use crate::error::DomainError;
use crate::value_objects::{ArticleStatus, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// Pagination options for category listings
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self {
            search: None,
            limit: 50,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    /// Check if a category name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// List categories with pagination
    async fn list(&self, query: &CategoryQuery) -> RepoResult<Vec<Category>>;

    /// Total category count for the query (ignoring limit/offset)
    async fn count(&self, query: &CategoryQuery) -> RepoResult<i64>;

    /// Create a new category
    async fn create(&self, category: &Category) -> RepoResult<()>;

    /// Update an existing category
    async fn update(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Number of published articles per category, keyed by category ID
    async fn published_article_counts(
        &self,
        category_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, i64)>>;
}

// ============================================================================
// Article Repository
// ============================================================================

/// Sort key for article listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrdering {
    #[default]
    CreatedAt,
    UpdatedAt,
    ViewsCount,
    Title,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

/// Filter, visibility, and pagination options for article queries.
///
/// The `scope` is mandatory and always applied; every other field narrows
/// the result set further.
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    pub scope: ArticleScope,
    /// Case-insensitive substring match against title, description, and content
    pub search: Option<String>,
    pub category_id: Option<Snowflake>,
    pub author_id: Option<Snowflake>,
    pub status: Option<ArticleStatus>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub ordering: ArticleOrdering,
    pub direction: OrderDirection,
    pub limit: i64,
    pub offset: i64,
}

impl ArticleQuery {
    pub fn new(scope: ArticleScope) -> Self {
        Self {
            scope,
            search: None,
            category_id: None,
            author_id: None,
            status: None,
            created_after: None,
            created_before: None,
            ordering: ArticleOrdering::default(),
            direction: OrderDirection::default(),
            limit: 20,
            offset: 0,
        }
    }
}

/// An article joined with its author and category for read models
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: User,
    pub category: Category,
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find article by ID, regardless of visibility
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>>;

    /// Find article by ID, joined with author and category, only if the
    /// given scope can see it
    async fn find_visible_by_id(
        &self,
        id: Snowflake,
        scope: &ArticleScope,
    ) -> RepoResult<Option<ArticleRecord>>;

    /// List articles matching the query
    async fn list(&self, query: &ArticleQuery) -> RepoResult<Vec<ArticleRecord>>;

    /// Total article count for the query (ignoring limit/offset)
    async fn count(&self, query: &ArticleQuery) -> RepoResult<i64>;

    /// Create a new article
    async fn create(&self, article: &Article) -> RepoResult<()>;

    /// Update an existing article
    async fn update(&self, article: &Article) -> RepoResult<()>;

    /// Delete an article
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Atomically bump the view counter, returning the new value
    async fn increment_views(&self, id: Snowflake) -> RepoResult<i32>;
}

// ============================================================================
// Scraped Article Repository
// ============================================================================

#[async_trait]
pub trait ScrapedArticleRepository: Send + Sync {
    /// List scraped articles, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<ScrapedArticle>>;

    /// Total scraped article count
    async fn count(&self) -> RepoResult<i64>;

    /// The most recently scraped articles, newest first
    async fn latest(&self, limit: i64) -> RepoResult<Vec<ScrapedArticle>>;

    /// Insert unless an entry with the same URL exists.
    /// Returns `true` if a new row was stored.
    async fn upsert(&self, entry: &ScrapedArticle) -> RepoResult<bool>;
}
