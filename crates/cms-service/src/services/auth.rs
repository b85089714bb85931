//! Authentication service
//!
//! Handles user registration, login, and token refresh. Refresh tokens are
//! stateless JWTs; refreshing simply re-issues a pair from a valid one.

use cms_common::auth::{hash_password, validate_password_strength, verify_password};
use cms_core::entities::User;
use cms_core::{DomainError, Role};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Role is chosen at registration and never changed afterwards
        let role = match request.role.as_deref() {
            None => Role::default(),
            Some(raw) => raw
                .parse::<Role>()
                .map_err(|_| ServiceError::Domain(DomainError::InvalidRole(raw.to_string())))?,
        };

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::UsernameAlreadyExists));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.email, role);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, role = %role, "User registered successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by username
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::Domain(DomainError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::Domain(DomainError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::Domain(DomainError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        // Generate tokens
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        // Validate the refresh token and extract its subject
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // The account may have been deleted since the token was issued
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        // Re-issue a fresh pair
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }
}
