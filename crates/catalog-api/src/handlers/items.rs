//! Item handlers

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::Json,
};
use tracing::{debug, info};

use crate::handlers::common::ErrorResponse;
use crate::pagination::PaginationQuery;
use crate::state::AppState;
use catalog_service::ItemServiceError;
use catalog_types::items::request::{CreateItemRequest, UpdateItemRequest};
use catalog_types::items::response::{ItemResponse, ItemStatsResponse};

/// GET /items - List items with optional pagination
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/items",
    params(
        ("skip" = Option<u32>, Query, description = "Number of items to skip", example = 0),
        ("limit" = Option<u32>, Query, description = "Maximum number of items to return", example = 10)
    ),
    responses((status = 200, description = "List of items", body = [ItemResponse])),
    tag = "items"
))]
pub async fn get_items(
	State(state): State<AppState>,
	Query(pq): Query<PaginationQuery>,
) -> Result<Json<Vec<ItemResponse>>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Listing items with pagination");
	let (skip, limit) = pq.effective();
	let items = state.item_service.list_items(skip, limit).await.map_err(|e| {
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse {
				error: "STORAGE_ERROR".to_string(),
				message: e.to_string(),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		)
	})?;

	Ok(Json(items.iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id} - Get item by id
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "items"
))]
pub async fn get_item_by_id(
	State(state): State<AppState>,
	Path(item_id): Path<i64>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
	let item = state
		.item_service
		.get_item(item_id)
		.await
		.map_err(|e| match e {
			ItemServiceError::NotFound(_) => (
				StatusCode::NOT_FOUND,
				Json(ErrorResponse {
					error: "ITEM_NOT_FOUND".to_string(),
					message: format!("Item {} not found", item_id),
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
			ItemServiceError::Storage(msg) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse {
					error: "STORAGE_ERROR".to_string(),
					message: msg,
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
		})?;

	Ok(Json(ItemResponse::from(&item)))
}

/// POST /items - Create a new item
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "items"
))]
pub async fn post_items(
	State(state): State<AppState>,
	Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), (StatusCode, Json<ErrorResponse>)> {
	let item = state.item_service.create_item(request).await.map_err(|e| {
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse {
				error: "STORAGE_ERROR".to_string(),
				message: e.to_string(),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		)
	})?;

	info!("Created item {}", item.id);
	Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// PATCH /items/{id} - Partially update an item
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "items"
))]
pub async fn patch_item(
	State(state): State<AppState>,
	Path(item_id): Path<i64>,
	Json(request): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
	let item = state
		.item_service
		.update_item(item_id, &request)
		.await
		.map_err(|e| match e {
			ItemServiceError::NotFound(_) => (
				StatusCode::NOT_FOUND,
				Json(ErrorResponse {
					error: "ITEM_NOT_FOUND".to_string(),
					message: format!("Item {} not found", item_id),
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
			ItemServiceError::Storage(msg) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse {
					error: "STORAGE_ERROR".to_string(),
					message: msg,
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
		})?;

	info!("Updated item {}", item_id);
	Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id} - Delete an item (requires API key)
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "items"
))]
pub async fn delete_item(
	State(state): State<AppState>,
	Path(item_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
	state
		.item_service
		.delete_item(item_id)
		.await
		.map_err(|e| match e {
			ItemServiceError::NotFound(_) => (
				StatusCode::NOT_FOUND,
				Json(ErrorResponse {
					error: "ITEM_NOT_FOUND".to_string(),
					message: format!("Item {} not found", item_id),
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
			ItemServiceError::Storage(msg) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse {
					error: "STORAGE_ERROR".to_string(),
					message: msg,
					timestamp: chrono::Utc::now().timestamp(),
				}),
			),
		})?;

	info!("Deleted item {}", item_id);
	Ok(StatusCode::NO_CONTENT)
}

/// GET /items/stats/summary - Aggregate price statistics
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/items/stats/summary",
    responses((status = 200, description = "Item statistics", body = ItemStatsResponse)),
    tag = "items"
))]
pub async fn get_item_stats(
	State(state): State<AppState>,
) -> Result<Json<ItemStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
	let stats = state.item_service.stats().await.map_err(|e| {
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse {
				error: "STORAGE_ERROR".to_string(),
				message: e.to_string(),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		)
	})?;

	Ok(Json(ItemStatsResponse::from(stats)))
}
