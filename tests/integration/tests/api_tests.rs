//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register an account and return its tokens
async fn register(server: &TestServer, request: &RegisterRequest) -> AuthResponse {
    let response = server
        .post("/api/v1/auth/register", request)
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED)
        .await
        .expect("Registration failed")
}

/// Create a category as an admin and return it
async fn create_category(server: &TestServer, admin_token: &str) -> CategoryResponse {
    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/v1/categories", admin_token, &request)
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED)
        .await
        .expect("Category creation failed")
}

/// Create an article and return it
async fn create_article(
    server: &TestServer,
    token: &str,
    request: &CreateArticleRequest,
) -> ArticleResponse {
    let response = server
        .post_auth("/api/v1/articles", token, request)
        .await
        .expect("Request failed");
    assert_json(response, StatusCode::CREATED)
        .await
        .expect("Article creation failed")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "author");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::unique_admin()).await;

    assert_eq!(auth.user.role, "admin");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same username
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    register(&server, &register_req).await;

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistent".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server, &RegisterRequest::unique()).await;

    // Refresh
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/token/refresh", &refresh_req)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert!(!refreshed.refresh_token.is_empty());
    assert_eq!(refreshed.user.id, auth.user.id);
}

#[tokio::test]
async fn test_get_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let auth = register(&server, &register_req).await;

    let response = server
        .get_auth("/api/v1/auth/profile", &auth.access_token)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, register_req.username);
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_get_profile_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let auth = register(&server, &register_req).await;

    // Change the password
    let body = serde_json::json!({
        "old_password": register_req.password,
        "new_password": "NewPass456!",
    });
    let response = server
        .post_auth("/api/v1/auth/change-password", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password works
    let login_req = LoginRequest {
        username: register_req.username.clone(),
        password: "NewPass456!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_admin_creates_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;

    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/v1/categories", &admin.access_token, &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(category.name, request.name);
    assert!(!category.slug.is_empty());
    assert_eq!(category.articles_count, 0);
}

#[tokio::test]
async fn test_author_cannot_create_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server, &RegisterRequest::unique()).await;

    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/v1/categories", &author.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_cannot_create_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateCategoryRequest::unique();
    let response = server.post("/api/v1/categories", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_list_categories_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    create_category(&server, &admin.access_token).await;

    let response = server.get("/api/v1/categories").await.unwrap();
    let page: PageResponse<CategoryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.count >= 1);
    assert!(!page.results.is_empty());
}

#[tokio::test]
async fn test_rename_category_regenerates_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let category = create_category(&server, &admin.access_token).await;

    let suffix = unique_suffix();
    let update = UpdateCategoryRequest {
        name: Some(format!("Renamed Category {suffix}")),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/categories/{}", category.id),
            &admin.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(updated.slug, category.slug);
    assert!(updated.slug.starts_with("renamed-category"));
}

#[tokio::test]
async fn test_delete_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let category = create_category(&server, &admin.access_token).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/categories/{}", category.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/categories/{}", category.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Article Tests
// ============================================================================

#[tokio::test]
async fn test_create_article() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let article = create_article(&server, &author.access_token, &request).await;

    assert_eq!(article.title, request.title);
    assert_eq!(article.status, "draft");
    assert_eq!(article.category.id, category.id);
    // The author is always the requester, never taken from the payload
    assert_eq!(article.author.id, author.user.id);
    assert_eq!(article.views_count, 0);
}

#[tokio::test]
async fn test_anonymous_cannot_create_article() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let response = server.post("/api/v1/articles", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_draft_hidden_from_anonymous() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    let response = server
        .get(&format!("/api/v1/articles/{}", draft.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_draft_hidden_from_other_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let other = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    let response = server
        .get_auth(
            &format!("/api/v1/articles/{}", draft.id),
            &other.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_draft_visible_to_its_author_and_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    // Own draft
    let response = server
        .get_auth(
            &format!("/api/v1/articles/{}", draft.id),
            &author.access_token,
        )
        .await
        .unwrap();
    let fetched: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, draft.id);

    // Admin sees every article
    let response = server
        .get_auth(
            &format!("/api/v1/articles/{}", draft.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_publish_makes_article_visible() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    // Publish
    let update = UpdateArticleRequest {
        status: Some("published".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", draft.id),
            &author.access_token,
            &update,
        )
        .await
        .unwrap();
    let published: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(published.status, "published");

    // Now visible to anonymous readers
    let response = server
        .get(&format!("/api/v1/articles/{}", draft.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_foreign_published_article_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let other = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::published(&category.id);
    let article = create_article(&server, &author.access_token, &request).await;

    // Visible to the other author, but not writable: 403
    let update = UpdateArticleRequest {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.id),
            &other.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_foreign_draft_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let other = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    // Write attempts on someone else's draft are forbidden, not hidden
    let update = UpdateArticleRequest {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", draft.id),
            &other.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_retitle_regenerates_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let article = create_article(&server, &author.access_token, &request).await;

    let update = UpdateArticleRequest {
        title: Some("A Brand New Title".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/articles/{}", article.id),
            &author.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_ne!(updated.slug, article.slug);
    assert!(updated.slug.starts_with("a-brand-new-title"));
}

#[tokio::test]
async fn test_view_count_increments_on_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::published(&category.id);
    let article = create_article(&server, &author.access_token, &request).await;

    let response = server
        .get(&format!("/api/v1/articles/{}", article.id))
        .await
        .unwrap();
    let first: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/v1/articles/{}", article.id))
        .await
        .unwrap();
    let second: ArticleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(second.views_count, first.views_count + 1);
}

#[tokio::test]
async fn test_delete_article() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::published(&category.id);
    let article = create_article(&server, &author.access_token, &request).await;

    let response = server
        .delete_auth(
            &format!("/api/v1/articles/{}", article.id),
            &author.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/v1/articles/{}", article.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_published_listing_page_envelope() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    for _ in 0..3 {
        let request = CreateArticleRequest::published(&category.id);
        create_article(&server, &author.access_token, &request).await;
    }

    let response = server
        .get("/api/v1/articles/published?limit=2&offset=0")
        .await
        .unwrap();
    let page: PageResponse<ArticleSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.count >= 3);
    assert_eq!(page.results.len(), 2);
    assert!(page.next.is_some());
    assert!(page.previous.is_none());
    assert!(page.results.iter().all(|a| a.status == "published"));
}

#[tokio::test]
async fn test_anonymous_listing_excludes_drafts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    let response = server.get("/api/v1/articles").await.unwrap();
    let page: PageResponse<ArticleSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.results.iter().all(|a| a.id != draft.id));
}

#[tokio::test]
async fn test_my_articles_includes_own_drafts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::draft(&category.id);
    let draft = create_article(&server, &author.access_token, &request).await;

    let response = server
        .get_auth("/api/v1/articles/my_articles", &author.access_token)
        .await
        .unwrap();
    let page: PageResponse<ArticleSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.results.iter().any(|a| a.id == draft.id));
}

#[tokio::test]
async fn test_drafts_listing_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/articles/drafts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_filter_articles_by_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let author = register(&server, &RegisterRequest::unique()).await;
    let category = create_category(&server, &admin.access_token).await;
    let other_category = create_category(&server, &admin.access_token).await;

    let request = CreateArticleRequest::published(&category.id);
    create_article(&server, &author.access_token, &request).await;
    let request = CreateArticleRequest::published(&other_category.id);
    create_article(&server, &author.access_token, &request).await;

    let response = server
        .get(&format!("/api/v1/articles?category={}", category.id))
        .await
        .unwrap();
    let page: PageResponse<ArticleSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!page.results.is_empty());
    assert!(page.results.iter().all(|a| a.category.id == category.id));
}

#[tokio::test]
async fn test_duplicate_article_title_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = register(&server, &RegisterRequest::unique_admin()).await;
    let category = create_category(&server, &admin.access_token).await;
    let author = register(&server, &RegisterRequest::unique()).await;

    // Identical titles produce identical slugs, which are unique
    let request = CreateArticleRequest::draft(&category.id);
    create_article(&server, &author.access_token, &request).await;

    let response = server
        .post_auth("/api/v1/articles", &author.access_token, &request)
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ARTICLE_SLUG_EXISTS");
}

// ============================================================================
// Scraper Tests
// ============================================================================

#[tokio::test]
async fn test_list_scraped_articles_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/scraper/articles").await.unwrap();
    let page: PageResponse<ScrapedArticleResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(page.count >= 0);
}

#[tokio::test]
async fn test_scrape_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server, &RegisterRequest::unique()).await;

    let response = server
        .post_auth("/api/v1/scraper/articles/scrape", &author.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_scrape_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/scraper/articles/scrape", &())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
