//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ArticleFilterRequest, ChangePasswordRequest, CreateArticleRequest, CreateCategoryRequest,
    LoginRequest, RefreshTokenRequest, RegisterRequest, ScrapeRunRequest, UpdateArticleRequest,
    UpdateCategoryRequest, UpdateProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    ArticleResponse, ArticleSummaryResponse, AuthResponse, CategoryResponse, CategorySummary,
    CurrentUserResponse, HealthResponse, PageResponse, PublicUserResponse, ReadinessResponse,
    ScrapeRunResponse, ScrapeSourceResult, ScrapedArticleResponse, ScrapedEntryResponse,
};

// Re-export mapper helper structs
pub use mappers::CategoryWithCount;
