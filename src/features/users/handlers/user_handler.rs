use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{
    ChangePasswordDto, CreateUserDto, UpdateUserDto, UserResponseDto,
};
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, MessageDto};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// Create an account without issuing tokens
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create_account(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(user.into()),
            Some("User created".to_string()),
            None,
        )),
    ))
}

/// Get the current user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let profile = service.get_by_id(user.user_id).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    let items: Vec<UserResponseDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(items)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(user.into()), None, None)))
}

/// Update a user. Callers may only update themselves unless they are admin,
/// and only admins can change roles.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not allowed to update this user"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if user.user_id != id && !user.is_admin() {
        return Err(AppError::Forbidden(
            "You can only update your own account".to_string(),
        ));
    }

    let updated = service.update_profile(id, dto, user.is_admin()).await?;
    Ok(Json(ApiResponse::success(
        Some(updated.into()),
        Some("User updated".to_string()),
        None,
    )))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change the current user's password
#[utoipa::path(
    post,
    path = "/api/users/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<MessageDto>),
        (status = 400, description = "Current password is incorrect"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "users",
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<ChangePasswordDto>,
) -> Result<Json<ApiResponse<MessageDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service
        .change_password(user.user_id, &dto.current_password, dto.new_password)
        .await?;

    Ok(Json(ApiResponse::success(
        Some(MessageDto::new("Password changed")),
        None,
        None,
    )))
}
