//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{articles, auth, categories, health, scraper, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(category_routes())
        .merge(article_routes())
        .merge(scraper_routes())
}

/// Authentication and profile routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/token/refresh", post(auth::refresh_token))
        .route("/auth/profile", get(users::get_profile))
        .route("/auth/profile", patch(users::update_profile))
        .route("/auth/change-password", post(users::change_password))
}

/// Public user routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id", get(users::get_user))
}

/// Category routes
///
/// PUT and PATCH both perform a partial update.
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/:category_id", get(categories::get_category))
        .route("/categories/:category_id", patch(categories::update_category))
        .route("/categories/:category_id", put(categories::update_category))
        .route("/categories/:category_id", delete(categories::delete_category))
}

/// Article routes
///
/// Fixed segments are registered before the `:article_id` match.
fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/articles", post(articles::create_article))
        .route("/articles/published", get(articles::list_published))
        .route("/articles/my_articles", get(articles::list_my_articles))
        .route("/articles/drafts", get(articles::list_drafts))
        .route("/articles/:article_id", get(articles::get_article))
        .route("/articles/:article_id", patch(articles::update_article))
        .route("/articles/:article_id", put(articles::update_article))
        .route("/articles/:article_id", delete(articles::delete_article))
}

/// Scraped article routes
fn scraper_routes() -> Router<AppState> {
    Router::new()
        .route("/scraper/articles", get(scraper::list_scraped))
        .route("/scraper/articles/latest", get(scraper::latest_scraped))
        .route("/scraper/articles/scrape", post(scraper::run_scrape))
}
