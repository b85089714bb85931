//! Article handlers
//!
//! Read visibility depends on who asks: listings silently narrow to what the
//! requester may see, so most read endpoints take an optional token.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cms_service::{
    ArticleFilterRequest, ArticleResponse, ArticleService, ArticleSummaryResponse,
    CreateArticleRequest, PageResponse, UpdateArticleRequest,
};

use crate::extractors::{ArticleIdPath, AuthUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List articles visible to the requester
///
/// GET /articles
pub async fn list_articles(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    pagination: Pagination,
    Query(filter): Query<ArticleFilterRequest>,
) -> ApiResult<Json<PageResponse<ArticleSummaryResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .list(&auth.requester(), filter, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// List published articles
///
/// GET /articles/published
pub async fn list_published(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(filter): Query<ArticleFilterRequest>,
) -> ApiResult<Json<PageResponse<ArticleSummaryResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .published(filter, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// List the current user's articles, any status
///
/// GET /articles/my_articles
pub async fn list_my_articles(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PageResponse<ArticleSummaryResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .my_articles(&auth.requester(), pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// List the current user's drafts (admins see all drafts)
///
/// GET /articles/drafts
pub async fn list_drafts(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PageResponse<ArticleSummaryResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service
        .drafts(&auth.requester(), pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// Get a single article, bumping its view count
///
/// GET /articles/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(path): Path<ArticleIdPath>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = path.article_id()?;
    let service = ArticleService::new(state.service_context());
    let response = service.get(&auth.requester(), article_id).await?;
    Ok(Json(response))
}

/// Create an article authored by the current user
///
/// POST /articles
pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateArticleRequest>,
) -> ApiResult<Created<Json<ArticleResponse>>> {
    let service = ArticleService::new(state.service_context());
    let response = service.create(&auth.requester(), request).await?;
    Ok(Created(Json(response)))
}

/// Update an article (author or admin)
///
/// PATCH /articles/{article_id}
pub async fn update_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ArticleIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateArticleRequest>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = path.article_id()?;
    let service = ArticleService::new(state.service_context());
    let response = service
        .update(&auth.requester(), article_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete an article (author or admin)
///
/// DELETE /articles/{article_id}
pub async fn delete_article(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ArticleIdPath>,
) -> ApiResult<NoContent> {
    let article_id = path.article_id()?;
    let service = ArticleService::new(state.service_context());
    service.delete(&auth.requester(), article_id).await?;
    Ok(NoContent)
}
