//! Article service
//!
//! Handles article queries, lifecycle, and ownership rules. Read visibility
//! always flows through an [`ArticleScope`] resolved from the requester;
//! write access is checked per article.

use chrono::{DateTime, Utc};
use cms_core::access::{article_scope, can_modify_article, ArticleScope, Requester};
use cms_core::entities::Article;
use cms_core::traits::{ArticleOrdering, ArticleQuery, ArticleRecord, OrderDirection};
use cms_core::{ArticleStatus, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    ArticleFilterRequest, ArticleResponse, ArticleSummaryResponse, CreateArticleRequest,
    PageResponse, UpdateArticleRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Article service
pub struct ArticleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArticleService<'a> {
    /// Create a new ArticleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List articles visible to the requester, with filters and pagination
    #[instrument(skip(self, requester, filter))]
    pub async fn list(
        &self,
        requester: &Requester,
        filter: ArticleFilterRequest,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<ArticleSummaryResponse>> {
        let scope = article_scope(requester);
        let query = build_query(scope, filter, limit, offset)?;

        self.run_query(query).await
    }

    /// Published articles only, regardless of who asks
    #[instrument(skip(self, filter))]
    pub async fn published(
        &self,
        filter: ArticleFilterRequest,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<ArticleSummaryResponse>> {
        let query = build_query(ArticleScope::PublishedOnly, filter, limit, offset)?;

        self.run_query(query).await
    }

    /// The requester's own articles, in any status
    #[instrument(skip(self, requester))]
    pub async fn my_articles(
        &self,
        requester: &Requester,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<ArticleSummaryResponse>> {
        let user_id = requester
            .user_id()
            .ok_or(DomainError::AuthenticationRequired)?;

        // The author filter already restricts the result set to one owner
        let mut query = ArticleQuery::new(ArticleScope::All);
        query.author_id = Some(user_id);
        query.limit = limit;
        query.offset = offset;

        self.run_query(query).await
    }

    /// The requester's own drafts (admins see all drafts)
    #[instrument(skip(self, requester))]
    pub async fn drafts(
        &self,
        requester: &Requester,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<ArticleSummaryResponse>> {
        let user_id = requester
            .user_id()
            .ok_or(DomainError::AuthenticationRequired)?;

        let mut query = ArticleQuery::new(ArticleScope::All);
        query.status = Some(ArticleStatus::Draft);
        if !requester.is_admin() {
            query.author_id = Some(user_id);
        }
        query.limit = limit;
        query.offset = offset;

        self.run_query(query).await
    }

    /// Fetch one article if the requester may see it, bumping its view count
    #[instrument(skip(self, requester))]
    pub async fn get(
        &self,
        requester: &Requester,
        article_id: Snowflake,
    ) -> ServiceResult<ArticleResponse> {
        let scope = article_scope(requester);
        let mut record = self
            .ctx
            .article_repo()
            .find_visible_by_id(article_id, &scope)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        // Every successful read counts as a view, the author's own included
        record.article.views_count = self.ctx.article_repo().increment_views(article_id).await?;

        Ok(ArticleResponse::from(&record))
    }

    /// Create a new article authored by the requester
    #[instrument(skip(self, requester, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        requester: &Requester,
        request: CreateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        let author_id = requester
            .user_id()
            .ok_or(DomainError::AuthenticationRequired)?;

        let category_id = parse_snowflake(&request.category_id, "category_id")?;
        let category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        let status = parse_status(request.status.as_deref())?.unwrap_or_default();

        let article = Article::new(
            self.ctx.generate_id(),
            request.title,
            request.description.unwrap_or_default(),
            request.content,
            category_id,
            author_id,
            status,
            request.featured_image,
        );

        self.ctx.article_repo().create(&article).await?;
        info!(article_id = %article.id, author_id = %author_id, status = %status, "Article created");

        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        Ok(ArticleResponse::from(&ArticleRecord {
            article,
            author,
            category,
        }))
    }

    /// Update an article (author or admin). Changing the title regenerates
    /// the slug; the author is never reassigned.
    #[instrument(skip(self, requester, request))]
    pub async fn update(
        &self,
        requester: &Requester,
        article_id: Snowflake,
        request: UpdateArticleRequest,
    ) -> ServiceResult<ArticleResponse> {
        let mut article = self.load_for_write(requester, article_id).await?;

        if let Some(title) = request.title {
            if title != article.title {
                article.retitle(title);
            }
        }
        if let Some(description) = request.description {
            article.description = description;
        }
        if let Some(content) = request.content {
            article.content = content;
        }
        if let Some(raw) = request.category_id {
            let category_id = parse_snowflake(&raw, "category_id")?;
            self.ctx
                .category_repo()
                .find_by_id(category_id)
                .await?
                .ok_or(DomainError::CategoryNotFound(category_id))?;
            article.category_id = category_id;
        }
        if let Some(status) = parse_status(request.status.as_deref())? {
            article.status = status;
        }
        if let Some(featured_image) = request.featured_image {
            article.featured_image = Some(featured_image);
        }

        article.updated_at = Utc::now();
        self.ctx.article_repo().update(&article).await?;
        info!(article_id = %article_id, "Article updated");

        let author = self
            .ctx
            .user_repo()
            .find_by_id(article.author_id)
            .await?
            .ok_or(DomainError::UserNotFound(article.author_id))?;
        let category = self
            .ctx
            .category_repo()
            .find_by_id(article.category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(article.category_id))?;

        Ok(ArticleResponse::from(&ArticleRecord {
            article,
            author,
            category,
        }))
    }

    /// Delete an article (author or admin)
    #[instrument(skip(self, requester))]
    pub async fn delete(
        &self,
        requester: &Requester,
        article_id: Snowflake,
    ) -> ServiceResult<()> {
        let article = self.load_for_write(requester, article_id).await?;

        self.ctx.article_repo().delete(article.id).await?;
        info!(article_id = %article_id, "Article deleted");

        Ok(())
    }

    /// Load an article for mutation, enforcing the ownership rule.
    ///
    /// Writes are forbidden (403) for anyone but the author or an admin,
    /// draft or not; only a genuinely absent article reads as 404.
    async fn load_for_write(
        &self,
        requester: &Requester,
        article_id: Snowflake,
    ) -> ServiceResult<Article> {
        let article = self
            .ctx
            .article_repo()
            .find_by_id(article_id)
            .await?
            .ok_or(DomainError::ArticleNotFound(article_id))?;

        if !can_modify_article(requester, &article) {
            return Err(ServiceError::Domain(DomainError::NotArticleAuthor));
        }

        Ok(article)
    }

    async fn run_query(
        &self,
        query: ArticleQuery,
    ) -> ServiceResult<PageResponse<ArticleSummaryResponse>> {
        let records = self.ctx.article_repo().list(&query).await?;
        let total = self.ctx.article_repo().count(&query).await?;

        let results = records.iter().map(ArticleSummaryResponse::from).collect();

        Ok(PageResponse::new(total, results, query.limit, query.offset))
    }
}

/// Translate raw filter parameters into a typed query
fn build_query(
    scope: ArticleScope,
    filter: ArticleFilterRequest,
    limit: i64,
    offset: i64,
) -> ServiceResult<ArticleQuery> {
    let mut query = ArticleQuery::new(scope);
    query.limit = limit;
    query.offset = offset;

    query.search = filter.search.filter(|s| !s.trim().is_empty());

    if let Some(raw) = filter.category {
        query.category_id = Some(parse_snowflake(&raw, "category")?);
    }
    if let Some(raw) = filter.author {
        query.author_id = Some(parse_snowflake(&raw, "author")?);
    }
    query.status = parse_status(filter.status.as_deref())?;

    if let Some(raw) = filter.created_after {
        query.created_after = Some(parse_timestamp(&raw, "created_after")?);
    }
    if let Some(raw) = filter.created_before {
        query.created_before = Some(parse_timestamp(&raw, "created_before")?);
    }

    if let Some(raw) = filter.ordering {
        let (ordering, direction) = parse_ordering(&raw)?;
        query.ordering = ordering;
        query.direction = direction;
    }

    Ok(query)
}

fn parse_snowflake(raw: &str, field: &str) -> ServiceResult<Snowflake> {
    raw.parse::<Snowflake>()
        .map_err(|_| ServiceError::validation(format!("Invalid {field}: {raw}")))
}

fn parse_status(raw: Option<&str>) -> ServiceResult<Option<ArticleStatus>> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse::<ArticleStatus>()
            .map(Some)
            .map_err(|_| ServiceError::Domain(DomainError::InvalidStatus(s.to_string()))),
    }
}

fn parse_timestamp(raw: &str, field: &str) -> ServiceResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ServiceError::validation(format!("Invalid {field}: expected RFC 3339 timestamp")))
}

/// Parse an ordering expression like `created_at` or `-views_count`
fn parse_ordering(raw: &str) -> ServiceResult<(ArticleOrdering, OrderDirection)> {
    let (column, direction) = match raw.strip_prefix('-') {
        Some(column) => (column, OrderDirection::Desc),
        None => (raw, OrderDirection::Asc),
    };

    let ordering = match column {
        "created_at" => ArticleOrdering::CreatedAt,
        "updated_at" => ArticleOrdering::UpdatedAt,
        "views_count" => ArticleOrdering::ViewsCount,
        "title" => ArticleOrdering::Title,
        other => {
            return Err(ServiceError::validation(format!(
                "Invalid ordering: {other}"
            )))
        }
    };

    Ok((ordering, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordering() {
        assert_eq!(
            parse_ordering("created_at").unwrap(),
            (ArticleOrdering::CreatedAt, OrderDirection::Asc)
        );
        assert_eq!(
            parse_ordering("-views_count").unwrap(),
            (ArticleOrdering::ViewsCount, OrderDirection::Desc)
        );
        assert!(parse_ordering("author_id").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(None).unwrap(), None);
        assert_eq!(
            parse_status(Some("published")).unwrap(),
            Some(ArticleStatus::Published)
        );
        assert!(parse_status(Some("archived")).is_err());
    }

    #[test]
    fn test_build_query_rejects_bad_ids() {
        let filter = ArticleFilterRequest {
            category: Some("not-a-number".to_string()),
            ..Default::default()
        };
        let result = build_query(ArticleScope::PublishedOnly, filter, 20, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(
            ArticleScope::PublishedOnly,
            ArticleFilterRequest::default(),
            20,
            0,
        )
        .unwrap();
        assert_eq!(query.ordering, ArticleOrdering::CreatedAt);
        assert_eq!(query.direction, OrderDirection::Desc);
        assert!(query.search.is_none());
    }
}
