//! User profile handlers
//!
//! Endpoints for the current user's profile and public author profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use cms_service::{
    ChangePasswordRequest, CurrentUserResponse, PublicUserResponse, UpdateProfileRequest,
    UserService,
};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the current user's profile
///
/// GET /auth/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id()).await?;
    Ok(Json(response))
}

/// Update the current user's profile
///
/// PATCH /auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id(), request).await?;
    Ok(Json(response))
}

/// Change the current user's password
///
/// POST /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.change_password(auth.user_id(), request).await?;
    Ok(NoContent)
}

/// Get a public user profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<PublicUserResponse>> {
    let user_id = path.user_id()?;
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}
