//! Category service
//!
//! Handles category listing and admin-only category management.

use std::collections::HashMap;

use cms_core::access::{can_modify_categories, Requester};
use cms_core::entities::Category;
use cms_core::traits::CategoryQuery;
use cms_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{
    CategoryResponse, CategoryWithCount, CreateCategoryRequest, PageResponse,
    UpdateCategoryRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List categories with their published article counts
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        search: Option<String>,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<CategoryResponse>> {
        let query = CategoryQuery {
            search,
            limit,
            offset,
        };

        let categories = self.ctx.category_repo().list(&query).await?;
        let total = self.ctx.category_repo().count(&query).await?;

        let ids: Vec<Snowflake> = categories.iter().map(|c| c.id).collect();
        let counts: HashMap<Snowflake, i64> = self
            .ctx
            .category_repo()
            .published_article_counts(&ids)
            .await?
            .into_iter()
            .collect();

        let results = categories
            .into_iter()
            .map(|category| {
                let articles_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryResponse::from(CategoryWithCount {
                    category,
                    articles_count,
                })
            })
            .collect();

        Ok(PageResponse::new(total, results, query.limit, query.offset))
    }

    /// Get a single category with its published article count
    #[instrument(skip(self))]
    pub async fn get(&self, category_id: Snowflake) -> ServiceResult<CategoryResponse> {
        let category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        let counts = self
            .ctx
            .category_repo()
            .published_article_counts(&[category_id])
            .await?;
        let articles_count = counts
            .iter()
            .find(|(id, _)| *id == category_id)
            .map(|(_, count)| *count)
            .unwrap_or(0);

        Ok(CategoryResponse::from(CategoryWithCount {
            category,
            articles_count,
        }))
    }

    /// Create a new category (admins only)
    #[instrument(skip(self, requester, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        requester: &Requester,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        self.require_category_admin(requester)?;

        if self.ctx.category_repo().name_exists(&request.name).await? {
            return Err(ServiceError::Domain(DomainError::CategoryNameExists));
        }

        let category = Category::new(
            self.ctx.generate_id(),
            request.name,
            request.description.unwrap_or_default(),
        );

        self.ctx.category_repo().create(&category).await?;
        info!(category_id = %category.id, slug = %category.slug, "Category created");

        Ok(CategoryResponse::from(CategoryWithCount {
            category,
            articles_count: 0,
        }))
    }

    /// Update a category (admins only). Renaming regenerates the slug.
    #[instrument(skip(self, requester, request))]
    pub async fn update(
        &self,
        requester: &Requester,
        category_id: Snowflake,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        self.require_category_admin(requester)?;

        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        let mut changed = false;

        if let Some(name) = request.name {
            if name != category.name {
                if self.ctx.category_repo().name_exists(&name).await? {
                    return Err(ServiceError::Domain(DomainError::CategoryNameExists));
                }
                category.rename(name);
                changed = true;
            }
        }

        if let Some(description) = request.description {
            category.description = description;
            changed = true;
        }

        if changed {
            category.updated_at = Utc::now();
            self.ctx.category_repo().update(&category).await?;
            info!(category_id = %category_id, "Category updated");
        }

        let counts = self
            .ctx
            .category_repo()
            .published_article_counts(&[category_id])
            .await?;
        let articles_count = counts
            .iter()
            .find(|(id, _)| *id == category_id)
            .map(|(_, count)| *count)
            .unwrap_or(0);

        Ok(CategoryResponse::from(CategoryWithCount {
            category,
            articles_count,
        }))
    }

    /// Delete a category (admins only)
    #[instrument(skip(self, requester))]
    pub async fn delete(
        &self,
        requester: &Requester,
        category_id: Snowflake,
    ) -> ServiceResult<()> {
        self.require_category_admin(requester)?;

        let _category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        self.ctx.category_repo().delete(category_id).await?;
        info!(category_id = %category_id, "Category deleted");

        Ok(())
    }

    fn require_category_admin(&self, requester: &Requester) -> ServiceResult<()> {
        if !requester.is_authenticated() {
            return Err(ServiceError::Domain(DomainError::AuthenticationRequired));
        }
        if !can_modify_categories(requester) {
            return Err(ServiceError::Domain(DomainError::AdminOnly));
        }
        Ok(())
    }
}
