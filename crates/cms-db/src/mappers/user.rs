//! User entity <-> model mapper

use cms_core::entities::User;
use cms_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            // Column is constrained to valid role values
            role: model.role.parse().unwrap_or_default(),
            is_superuser: model.is_superuser,
            bio: model.bio,
            profile_image: model.profile_image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
