//! Authentication extractors
//!
//! Extracts and validates JWT tokens from the Authorization header, then
//! loads the account so handlers get a fully resolved [`Requester`]. Role
//! and superuser status live in the database, not the token, so a role
//! change takes effect on the next request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use cms_core::access::Requester;
use cms_core::entities::User;
use cms_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// The account ID
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }

    /// The access-rule view of this account
    pub fn requester(&self) -> Requester {
        Requester::from_user(&self.user)
    }
}

async fn resolve_user<S>(bearer: &Bearer, state: &S) -> Result<User, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let app_state = AppState::from_ref(state);

    let claims = app_state
        .jwt_service()
        .validate_access_token(bearer.token())
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::InvalidAuthFormat
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid user ID in token");
        ApiError::InvalidAuthFormat
    })?;

    // The account may have been deleted since the token was issued
    app_state
        .service_context()
        .user_repo()
        .find_by_id(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or(ApiError::InvalidAuthFormat)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let user = resolve_user(&bearer, state).await?;

        Ok(AuthUser { user })
    }
}

/// Optional authenticated user
///
/// Resolves to an anonymous requester if no authorization header is present,
/// or an error if a token is present but invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The access-rule view of this request's caller
    pub fn requester(&self) -> Requester {
        match &self.0 {
            Some(auth) => auth.requester(),
            None => Requester::Anonymous,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let user = resolve_user(&bearer, state).await?;
                Ok(OptionalAuthUser(Some(AuthUser { user })))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}
