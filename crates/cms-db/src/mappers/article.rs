//! Article entity <-> model mappers

use cms_core::entities::{Article, Category, User};
use cms_core::traits::ArticleRecord;
use cms_core::value_objects::Snowflake;

use crate::models::{ArticleModel, ArticleRecordRow};

/// Convert ArticleModel to Article entity
impl From<ArticleModel> for Article {
    fn from(model: ArticleModel) -> Self {
        Article {
            id: Snowflake::new(model.id),
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            category_id: Snowflake::new(model.category_id),
            author_id: Snowflake::new(model.author_id),
            // Column is constrained to valid status values
            status: model.status.parse().unwrap_or_default(),
            featured_image: model.featured_image,
            views_count: model.views_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a joined article row into its article, author, and category parts
pub fn record_from_row(row: ArticleRecordRow) -> ArticleRecord {
    let author = User {
        id: Snowflake::new(row.author_id),
        username: row.author_username,
        email: row.author_email,
        role: row.author_role.parse().unwrap_or_default(),
        is_superuser: row.author_is_superuser,
        bio: row.author_bio,
        profile_image: row.author_profile_image,
        created_at: row.author_created_at,
        updated_at: row.author_updated_at,
    };

    let category = Category {
        id: Snowflake::new(row.category_id),
        name: row.category_name,
        slug: row.category_slug,
        description: row.category_description,
        created_at: row.category_created_at,
        updated_at: row.category_updated_at,
    };

    let article = Article {
        id: Snowflake::new(row.id),
        title: row.title,
        slug: row.slug,
        description: row.description,
        content: row.content,
        category_id: category.id,
        author_id: author.id,
        status: row.status.parse().unwrap_or_default(),
        featured_image: row.featured_image,
        views_count: row.views_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };

    ArticleRecord {
        article,
        author,
        category,
    }
}
