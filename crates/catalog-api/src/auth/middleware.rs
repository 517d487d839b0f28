//! Authentication middleware using the auth traits

use axum::{
	extract::{Request, State},
	http::StatusCode,
	middleware::Next,
	response::{IntoResponse, Response},
};
use axum::Json;
use catalog_types::auth::{AuthRequest, AuthenticationResult};
use tracing::{debug, warn};

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

/// A route gated behind authentication, matched by method and path prefix
#[derive(Debug, Clone)]
pub struct ProtectedRoute {
	pub method: String,
	pub path_prefix: String,
}

impl ProtectedRoute {
	pub fn new(method: &str, path_prefix: &str) -> Self {
		Self {
			method: method.to_string(),
			path_prefix: path_prefix.to_string(),
		}
	}

	pub fn matches(&self, method: &str, path: &str) -> bool {
		self.method.eq_ignore_ascii_case(method) && path.starts_with(&self.path_prefix)
	}
}

/// Auth middleware configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
	/// Routes that require authentication
	pub protected_routes: Vec<ProtectedRoute>,
	/// Paths that are completely public (no auth check)
	pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			protected_routes: vec![ProtectedRoute::new("DELETE", "/items")],
			public_paths: vec!["/health".to_string()],
		}
	}
}

/// Authentication middleware function
///
/// Requests outside the protected routes pass through untouched; the
/// static key check only ever gates what `AuthConfig` names.
pub async fn auth_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let path = request.uri().path().to_string();
	let method = request.method().to_string();

	if state.auth_config.public_paths.iter().any(|p| path.starts_with(p)) {
		debug!("Public path {}, skipping auth", path);
		return next.run(request).await;
	}

	if !state
		.auth_config
		.protected_routes
		.iter()
		.any(|r| r.matches(&method, &path))
	{
		return next.run(request).await;
	}

	let api_key = request
		.headers()
		.get("x-api-key")
		.and_then(|v| v.to_str().ok())
		.unwrap_or_default()
		.to_string();

	let auth_request = AuthRequest::new(method.clone(), path.clone())
		.with_header("x-api-key".to_string(), api_key);

	match state.authenticator.authenticate(&auth_request).await {
		AuthenticationResult::Authorized(context) => {
			debug!("Request authenticated for {}", context.user_id);
			let mut request = request;
			request.extensions_mut().insert(context);
			next.run(request).await
		},
		AuthenticationResult::Bypassed => {
			debug!("Authentication bypassed for path: {}", path);
			next.run(request).await
		},
		AuthenticationResult::Unauthorized(reason) => {
			warn!("Authentication failed for {} {}: {}", method, path, reason);
			(
				StatusCode::UNAUTHORIZED,
				Json(ErrorResponse {
					error: "UNAUTHORIZED".to_string(),
					message: reason,
					timestamp: chrono::Utc::now().timestamp(),
				}),
			)
				.into_response()
		},
	}
}
