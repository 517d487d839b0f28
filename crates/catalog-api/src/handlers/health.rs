use axum::response::Json;
use serde::Serialize;

/// Root greeting response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
	pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
	pub status: String,
}

/// GET / - Root greeting
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting message", body = MessageResponse)),
    tag = "health"
))]
pub async fn root() -> Json<MessageResponse> {
	Json(MessageResponse {
		message: "Hello from the catalog API!".to_string(),
	})
}

/// GET /health - Health check for load balancers
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "health"
))]
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok".to_string(),
	})
}
