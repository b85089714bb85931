//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use cms_common::auth::JwtService;
use cms_common::config::ScraperConfig;
use cms_core::traits::{
    ArticleRepository, CategoryRepository, ScrapedArticleRepository, UserRepository,
};
use cms_core::SnowflakeGenerator;
use cms_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - Scraper settings for the content ingestion job
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    article_repo: Arc<dyn ArticleRepository>,
    scraped_article_repo: Arc<dyn ScrapedArticleRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Scraper settings
    scraper_config: ScraperConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        scraped_article_repo: Arc<dyn ScrapedArticleRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        scraper_config: ScraperConfig,
    ) -> Self {
        Self {
            pool,
            user_repo,
            category_repo,
            article_repo,
            scraped_article_repo,
            jwt_service,
            snowflake_generator,
            scraper_config,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the article repository
    pub fn article_repo(&self) -> &dyn ArticleRepository {
        self.article_repo.as_ref()
    }

    /// Get the scraped article repository
    pub fn scraped_article_repo(&self) -> &dyn ScrapedArticleRepository {
        self.scraped_article_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Get the scraper settings
    pub fn scraper_config(&self) -> &ScraperConfig {
        &self.scraper_config
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> cms_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("scraper_config", &self.scraper_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    article_repo: Option<Arc<dyn ArticleRepository>>,
    scraped_article_repo: Option<Arc<dyn ScrapedArticleRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    scraper_config: Option<ScraperConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            category_repo: None,
            article_repo: None,
            scraped_article_repo: None,
            jwt_service: None,
            snowflake_generator: None,
            scraper_config: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn article_repo(mut self, repo: Arc<dyn ArticleRepository>) -> Self {
        self.article_repo = Some(repo);
        self
    }

    pub fn scraped_article_repo(mut self, repo: Arc<dyn ScrapedArticleRepository>) -> Self {
        self.scraped_article_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn scraper_config(mut self, config: ScraperConfig) -> Self {
        self.scraper_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.category_repo.ok_or_else(|| {
                super::error::ServiceError::validation("category_repo is required")
            })?,
            self.article_repo.ok_or_else(|| {
                super::error::ServiceError::validation("article_repo is required")
            })?,
            self.scraped_article_repo.ok_or_else(|| {
                super::error::ServiceError::validation("scraped_article_repo is required")
            })?,
            self.jwt_service.ok_or_else(|| {
                super::error::ServiceError::validation("jwt_service is required")
            })?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
            self.scraper_config.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
