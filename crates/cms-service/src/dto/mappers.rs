//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use cms_core::entities::{Category, ScrapedArticle, User};
use cms_core::traits::ArticleRecord;

use super::responses::{
    ArticleResponse, ArticleSummaryResponse, CategoryResponse, CategorySummary,
    CurrentUserResponse, PublicUserResponse, ScrapedArticleResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            is_superuser: user.is_superuser,
            bio: user.bio.clone(),
            profile_image: user.profile_image.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            bio: user.bio.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

/// Helper struct pairing a category with its published article count
pub struct CategoryWithCount {
    pub category: Category,
    pub articles_count: i64,
}

impl From<CategoryWithCount> for CategoryResponse {
    fn from(item: CategoryWithCount) -> Self {
        Self {
            id: item.category.id.to_string(),
            name: item.category.name,
            slug: item.category.slug,
            description: item.category.description,
            articles_count: item.articles_count,
            created_at: item.category.created_at,
            updated_at: item.category.updated_at,
        }
    }
}

// ============================================================================
// Article Mappers
// ============================================================================

impl From<&ArticleRecord> for ArticleResponse {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.article.id.to_string(),
            title: record.article.title.clone(),
            slug: record.article.slug.clone(),
            description: record.article.description.clone(),
            content: record.article.content.clone(),
            category: CategorySummary::from(&record.category),
            author: PublicUserResponse::from(&record.author),
            status: record.article.status.as_str().to_string(),
            featured_image: record.article.featured_image.clone(),
            views_count: record.article.views_count,
            created_at: record.article.created_at,
            updated_at: record.article.updated_at,
        }
    }
}

impl From<&ArticleRecord> for ArticleSummaryResponse {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.article.id.to_string(),
            title: record.article.title.clone(),
            slug: record.article.slug.clone(),
            description: record.article.description.clone(),
            category: CategorySummary::from(&record.category),
            author: PublicUserResponse::from(&record.author),
            status: record.article.status.as_str().to_string(),
            featured_image: record.article.featured_image.clone(),
            views_count: record.article.views_count,
            created_at: record.article.created_at,
            updated_at: record.article.updated_at,
        }
    }
}

// ============================================================================
// Scraped Article Mappers
// ============================================================================

impl From<&ScrapedArticle> for ScrapedArticleResponse {
    fn from(entry: &ScrapedArticle) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            url: entry.url.clone(),
            source: entry.source.clone(),
            scraped_at: entry.scraped_at,
        }
    }
}

impl From<ScrapedArticle> for ScrapedArticleResponse {
    fn from(entry: ScrapedArticle) -> Self {
        Self::from(&entry)
    }
}
