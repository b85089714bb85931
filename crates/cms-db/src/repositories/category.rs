//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use cms_core::entities::Category;
use cms_core::error::DomainError;
use cms_core::traits::{CategoryQuery, CategoryRepository, RepoResult};
use cms_core::value_objects::Snowflake;

use crate::models::{CategoryCountModel, CategoryModel};

use super::error::{category_not_found, map_db_error, map_unique_violation};
use super::like_pattern;

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_search(builder: &mut QueryBuilder<'_, Postgres>, query: &CategoryQuery) {
        if let Some(search) = &query.search {
            builder.push(" AND name ILIKE ");
            builder.push_bind(like_pattern(search));
        }
    }
}

/// Both `name` and `slug` are unique; the constraint name tells which clashed
fn slug_or_name_conflict(constraint: Option<&str>) -> DomainError {
    if constraint == Some("categories_slug_key") {
        DomainError::CategorySlugExists
    } else {
        DomainError::CategoryNameExists
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &CategoryQuery) -> RepoResult<Vec<Category>> {
        let mut builder = QueryBuilder::new(
            "SELECT id, name, slug, description, created_at, updated_at \
             FROM categories WHERE 1 = 1",
        );
        Self::push_search(&mut builder, query);

        builder.push(" ORDER BY name ASC LIMIT ");
        builder.push_bind(query.limit.clamp(1, 100));
        builder.push(" OFFSET ");
        builder.push_bind(query.offset.max(0));

        let results = builder
            .build_query_as::<CategoryModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &CategoryQuery) -> RepoResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM categories WHERE 1 = 1");
        Self::push_search(&mut builder, query);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO categories (id, name, slug, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, slug_or_name_conflict))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories
            SET name = $2, slug = $3, description = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, slug_or_name_conflict))?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn published_article_counts(
        &self,
        category_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, i64)>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = category_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, CategoryCountModel>(
            r"
            SELECT category_id, COUNT(*) AS articles_count
            FROM articles
            WHERE status = 'published' AND category_id = ANY($1)
            GROUP BY category_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (Snowflake::new(row.category_id), row.articles_count))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCategoryRepository>();
    }
}
