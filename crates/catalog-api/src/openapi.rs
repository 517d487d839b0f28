use crate::handlers::{common::ErrorResponse, health, items};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use catalog_types::items::request::{CreateItemRequest, UpdateItemRequest};
use catalog_types::items::response::{ItemResponse, ItemStatsResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        items::get_items,
        items::get_item_by_id,
        items::post_items,
        items::patch_item,
        items::delete_item,
        items::get_item_stats,
    ),
    components(schemas(
        CreateItemRequest, UpdateItemRequest, ItemResponse, ItemStatsResponse,
        ErrorResponse
    )),
    modifiers(&ApiKeySecurity),
    tags(
        (name = "items", description = "Item CRUD and statistics endpoints"),
        (name = "health", description = "Root and health endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the x-api-key header scheme referenced by the delete path
struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
	fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
		if let Some(components) = openapi.components.as_mut() {
			components.add_security_scheme(
				"api_key",
				SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-api-key"))),
			);
		}
	}
}
