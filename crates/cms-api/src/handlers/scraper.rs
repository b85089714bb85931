//! Scraper handlers
//!
//! Scraped articles are read-only through the API; the only mutation is the
//! admin-triggered scrape run itself.

use axum::{extract::State, Json};
use cms_service::{
    PageResponse, ScrapeRunRequest, ScrapeRunResponse, ScrapedArticleResponse, ScraperService,
};

use crate::extractors::{AuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// List stored scraped articles, newest first
///
/// GET /scraper/articles
pub async fn list_scraped(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<PageResponse<ScrapedArticleResponse>>> {
    let service = ScraperService::new(state.service_context());
    let response = service.list(pagination.limit, pagination.offset).await?;
    Ok(Json(response))
}

/// The most recently scraped articles
///
/// GET /scraper/articles/latest?limit=N
pub async fn latest_scraped(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ScrapedArticleResponse>>> {
    let service = ScraperService::new(state.service_context());
    let response = service.latest(pagination.limit).await?;
    Ok(Json(response))
}

/// Trigger a scrape run (admin only)
///
/// POST /scraper/articles/scrape with an optional {limit} body
pub async fn run_scrape(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<ScrapeRunRequest>>,
) -> ApiResult<Json<ScrapeRunResponse>> {
    let limit = body.and_then(|Json(request)| request.limit);
    let service = ScraperService::new(state.service_context());
    let response = service.run_scrape(&auth.requester(), limit).await?;
    Ok(Json(response))
}
