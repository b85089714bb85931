//! Category handlers
//!
//! Category reads are public; writes require an admin.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cms_service::{
    CategoryResponse, CategoryService, CreateCategoryRequest, PageResponse, UpdateCategoryRequest,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, CategoryIdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Category list filters
#[derive(Debug, Deserialize, Default)]
pub struct CategoryListParams {
    pub search: Option<String>,
}

/// List categories with published article counts
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<CategoryListParams>,
) -> ApiResult<Json<PageResponse<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service
        .list(params.search, pagination.limit, pagination.offset)
        .await?;
    Ok(Json(response))
}

/// Get a single category
///
/// GET /categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(path): Path<CategoryIdPath>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = path.category_id()?;
    let service = CategoryService::new(state.service_context());
    let response = service.get(category_id).await?;
    Ok(Json(response))
}

/// Create a category (admin only)
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(&auth.requester(), request).await?;
    Ok(Created(Json(response)))
}

/// Update a category (admin only)
///
/// PATCH /categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CategoryIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = path.category_id()?;
    let service = CategoryService::new(state.service_context());
    let response = service
        .update(&auth.requester(), category_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a category (admin only)
///
/// DELETE /categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CategoryIdPath>,
) -> ApiResult<NoContent> {
    let category_id = path.category_id()?;
    let service = CategoryService::new(state.service_context());
    service.delete(&auth.requester(), category_id).await?;
    Ok(NoContent)
}
