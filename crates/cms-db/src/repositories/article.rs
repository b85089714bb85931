//! PostgreSQL implementation of ArticleRepository
//!
//! Listing queries are assembled with `QueryBuilder`: the caller's visibility
//! scope is always pushed first, then optional filters narrow the set.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use cms_core::access::ArticleScope;
use cms_core::entities::Article;
use cms_core::error::DomainError;
use cms_core::traits::{
    ArticleOrdering, ArticleQuery, ArticleRecord, ArticleRepository, OrderDirection, RepoResult,
};
use cms_core::value_objects::Snowflake;

use crate::mappers::record_from_row;
use crate::models::{ArticleModel, ArticleRecordRow};

use super::error::{article_not_found, map_db_error, map_unique_violation};
use super::like_pattern;

const RECORD_SELECT: &str = r"
    SELECT a.id, a.title, a.slug, a.description, a.content, a.category_id, a.author_id,
           a.status, a.featured_image, a.views_count, a.created_at, a.updated_at,
           u.username AS author_username, u.email AS author_email, u.role AS author_role,
           u.is_superuser AS author_is_superuser, u.bio AS author_bio,
           u.profile_image AS author_profile_image, u.created_at AS author_created_at,
           u.updated_at AS author_updated_at,
           c.name AS category_name, c.slug AS category_slug,
           c.description AS category_description, c.created_at AS category_created_at,
           c.updated_at AS category_updated_at
    FROM articles a
    JOIN users u ON u.id = a.author_id
    JOIN categories c ON c.id = a.category_id
    WHERE 1 = 1";

/// PostgreSQL implementation of ArticleRepository
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    /// Create a new PgArticleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, scope: &ArticleScope) {
        match scope {
            ArticleScope::All => {}
            ArticleScope::PublishedOnly => {
                builder.push(" AND a.status = 'published'");
            }
            ArticleScope::OwnOrPublished(user_id) => {
                builder.push(" AND (a.status = 'published' OR a.author_id = ");
                builder.push_bind(user_id.into_inner());
                builder.push(")");
            }
        }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &ArticleQuery) {
        Self::push_scope(builder, &query.scope);

        if let Some(search) = &query.search {
            let pattern = like_pattern(search);
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
        if let Some(category_id) = query.category_id {
            builder.push(" AND a.category_id = ");
            builder.push_bind(category_id.into_inner());
        }
        if let Some(author_id) = query.author_id {
            builder.push(" AND a.author_id = ");
            builder.push_bind(author_id.into_inner());
        }
        if let Some(status) = query.status {
            builder.push(" AND a.status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(created_after) = query.created_after {
            builder.push(" AND a.created_at >= ");
            builder.push_bind(created_after);
        }
        if let Some(created_before) = query.created_before {
            builder.push(" AND a.created_at <= ");
            builder.push_bind(created_before);
        }
    }

    fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, query: &ArticleQuery) {
        let column = match query.ordering {
            ArticleOrdering::CreatedAt => "a.created_at",
            ArticleOrdering::UpdatedAt => "a.updated_at",
            ArticleOrdering::ViewsCount => "a.views_count",
            ArticleOrdering::Title => "a.title",
        };
        let direction = match query.direction {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        };
        // Snowflake IDs as a stable tiebreaker
        builder.push(format!(" ORDER BY {column} {direction}, a.id DESC"));
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Article>> {
        let result = sqlx::query_as::<_, ArticleModel>(
            r"
            SELECT id, title, slug, description, content, category_id, author_id,
                   status, featured_image, views_count, created_at, updated_at
            FROM articles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Article::from))
    }

    #[instrument(skip(self))]
    async fn find_visible_by_id(
        &self,
        id: Snowflake,
        scope: &ArticleScope,
    ) -> RepoResult<Option<ArticleRecord>> {
        let mut builder = QueryBuilder::new(RECORD_SELECT);
        builder.push(" AND a.id = ");
        builder.push_bind(id.into_inner());
        Self::push_scope(&mut builder, scope);

        let row = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(record_from_row))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ArticleQuery) -> RepoResult<Vec<ArticleRecord>> {
        let mut builder = QueryBuilder::new(RECORD_SELECT);
        Self::push_filters(&mut builder, query);
        Self::push_ordering(&mut builder, query);

        builder.push(" LIMIT ");
        builder.push_bind(query.limit.clamp(1, 100));
        builder.push(" OFFSET ");
        builder.push_bind(query.offset.max(0));

        let rows = builder
            .build_query_as::<ArticleRecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(record_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &ArticleQuery) -> RepoResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles a WHERE 1 = 1");
        Self::push_filters(&mut builder, query);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, article: &Article) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO articles (id, title, slug, description, content, category_id,
                                  author_id, status, featured_image, views_count,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(article.id.into_inner())
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.category_id.into_inner())
        .bind(article.author_id.into_inner())
        .bind(article.status.as_str())
        .bind(&article.featured_image)
        .bind(article.views_count)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::ArticleSlugExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, article: &Article) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE articles
            SET title = $2, slug = $3, description = $4, content = $5, category_id = $6,
                status = $7, featured_image = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(article.id.into_inner())
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.description)
        .bind(&article.content)
        .bind(article.category_id.into_inner())
        .bind(article.status.as_str())
        .bind(&article.featured_image)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::ArticleSlugExists))?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(article.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(article_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: Snowflake) -> RepoResult<i32> {
        // Atomic in-place increment, safe under concurrent reads
        let views = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE articles
            SET views_count = views_count + 1
            WHERE id = $1
            RETURNING views_count
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        views.ok_or_else(|| article_not_found(id))
    }
}
