use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::waste_items::dtos::{
    CreateWasteItemDto, UpdateWasteItemDto, WasteItemResponseDto,
};
use crate::features::waste_items::services::WasteItemService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// List all waste items, newest first
#[utoipa::path(
    get,
    path = "/api/waste-items",
    responses(
        (status = 200, description = "Waste items", body = ApiResponse<Vec<WasteItemResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "waste-items",
    security(("bearer_auth" = []))
)]
pub async fn list_waste_items(
    _user: AuthenticatedUser,
    State(service): State<Arc<WasteItemService>>,
) -> Result<Json<ApiResponse<Vec<WasteItemResponseDto>>>> {
    let items = service.list().await?;
    let dtos: Vec<WasteItemResponseDto> = items.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::list(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/waste-items/{id}",
    params(("id" = i32, Path, description = "Waste item ID")),
    responses(
        (status = 200, description = "Waste item found", body = ApiResponse<WasteItemResponseDto>),
        (status = 404, description = "Waste item not found")
    ),
    tag = "waste-items",
    security(("bearer_auth" = []))
)]
pub async fn get_waste_item(
    _user: AuthenticatedUser,
    State(service): State<Arc<WasteItemService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<WasteItemResponseDto>>> {
    let item = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(item.into()), None, None)))
}

/// Declare a waste item for pickup, owned by the caller
#[utoipa::path(
    post,
    path = "/api/waste-items",
    request_body = CreateWasteItemDto,
    responses(
        (status = 201, description = "Waste item created", body = ApiResponse<WasteItemResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "waste-items",
    security(("bearer_auth" = []))
)]
pub async fn create_waste_item(
    user: AuthenticatedUser,
    State(service): State<Arc<WasteItemService>>,
    AppJson(dto): AppJson<CreateWasteItemDto>,
) -> Result<(StatusCode, Json<ApiResponse<WasteItemResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.create(&dto.into_model(user.user_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(item.into()),
            Some("Waste item created".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/waste-items/{id}",
    params(("id" = i32, Path, description = "Waste item ID")),
    request_body = UpdateWasteItemDto,
    responses(
        (status = 200, description = "Waste item updated", body = ApiResponse<WasteItemResponseDto>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Waste item not found")
    ),
    tag = "waste-items",
    security(("bearer_auth" = []))
)]
pub async fn update_waste_item(
    user: AuthenticatedUser,
    State(service): State<Arc<WasteItemService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateWasteItemDto>,
) -> Result<Json<ApiResponse<WasteItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.update(id, &user, &dto.into()).await?;
    Ok(Json(ApiResponse::success(
        Some(item.into()),
        Some("Waste item updated".to_string()),
        None,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/waste-items/{id}",
    params(("id" = i32, Path, description = "Waste item ID")),
    responses(
        (status = 204, description = "Waste item deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Waste item not found")
    ),
    tag = "waste-items",
    security(("bearer_auth" = []))
)]
pub async fn delete_waste_item(
    user: AuthenticatedUser,
    State(service): State<Arc<WasteItemService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}
