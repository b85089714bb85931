//! # cms-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod scrape;
pub mod services;

pub use dto::{
    ArticleFilterRequest, ArticleResponse, ArticleSummaryResponse, AuthResponse,
    CategoryResponse, CategorySummary, ChangePasswordRequest, CreateArticleRequest,
    CreateCategoryRequest, CurrentUserResponse, HealthResponse, LoginRequest, PageResponse,
    PublicUserResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest,
    ScrapeRunRequest, ScrapeRunResponse, ScrapeSourceResult, ScrapedArticleResponse,
    ScrapedEntryResponse, UpdateArticleRequest, UpdateCategoryRequest, UpdateProfileRequest,
};
pub use services::{
    ArticleService, AuthService, CategoryService, ScraperService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
