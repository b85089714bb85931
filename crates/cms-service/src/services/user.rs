//! User service
//!
//! Handles user profile operations.

use cms_common::auth::{hash_password, validate_password_strength, verify_password};
use cms_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{ChangePasswordRequest, CurrentUserResponse, PublicUserResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID (public profile)
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<PublicUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(PublicUserResponse::from(&user))
    }

    /// Get current authenticated user (full profile)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the current user's profile. Username and role are immutable.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        // Update email if provided
        if let Some(email) = request.email {
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
                }
                user.email = email;
                changed = true;
            }
        }

        // Update bio if provided
        if let Some(bio) = request.bio {
            user.bio = Some(bio);
            changed = true;
        }

        // Update profile image if provided
        if let Some(profile_image) = request.profile_image {
            user.profile_image = Some(profile_image);
            changed = true;
        }

        if changed {
            user.updated_at = Utc::now();
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User profile updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Change the current user's password
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.old_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user_id, "Password change failed: wrong current password");
            return Err(ServiceError::Domain(DomainError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx.user_repo().update_password(user_id, &new_hash).await?;
        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
