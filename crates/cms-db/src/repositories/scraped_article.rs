//! PostgreSQL implementation of ScrapedArticleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cms_core::entities::ScrapedArticle;
use cms_core::traits::{RepoResult, ScrapedArticleRepository};

use crate::models::ScrapedArticleModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ScrapedArticleRepository
#[derive(Clone)]
pub struct PgScrapedArticleRepository {
    pool: PgPool,
}

impl PgScrapedArticleRepository {
    /// Create a new PgScrapedArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScrapedArticleRepository for PgScrapedArticleRepository {
    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<ScrapedArticle>> {
        let results = sqlx::query_as::<_, ScrapedArticleModel>(
            r"
            SELECT id, title, url, source, scraped_at
            FROM scraped_articles
            ORDER BY scraped_at DESC, id DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit.clamp(1, 100))
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ScrapedArticle::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scraped_articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn latest(&self, limit: i64) -> RepoResult<Vec<ScrapedArticle>> {
        self.list(limit, 0).await
    }

    #[instrument(skip(self))]
    async fn upsert(&self, entry: &ScrapedArticle) -> RepoResult<bool> {
        // URL is the sole dedup key; conflicting inserts are silently skipped
        let result = sqlx::query(
            r"
            INSERT INTO scraped_articles (id, title, url, source, scraped_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (url) DO NOTHING
            ",
        )
        .bind(entry.id.into_inner())
        .bind(&entry.title)
        .bind(&entry.url)
        .bind(&entry.source)
        .bind(entry.scraped_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgScrapedArticleRepository>();
    }
}
