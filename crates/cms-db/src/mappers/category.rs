//! Category entity <-> model mapper

use cms_core::entities::Category;
use cms_core::value_objects::Snowflake;

use crate::models::CategoryModel;

/// Convert CategoryModel to Category entity
impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
