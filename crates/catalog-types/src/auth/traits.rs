//! Core authentication traits

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Authentication result with client context
#[derive(Debug, Clone)]
pub enum AuthenticationResult {
	/// Authentication successful with client context
	Authorized(AuthContext),
	/// Authentication failed
	Unauthorized(String),
	/// Authentication bypassed (e.g., for public endpoints)
	Bypassed,
}

/// Authenticated client context
#[derive(Debug, Clone)]
pub struct AuthContext {
	/// Identifier for the authenticated principal
	pub user_id: String,
	/// When this context was created
	pub created_at: DateTime<Utc>,
}

impl AuthContext {
	/// Create a new auth context
	pub fn new(user_id: String) -> Self {
		Self {
			user_id,
			created_at: Utc::now(),
		}
	}
}

/// Authentication request context
#[derive(Debug, Clone)]
pub struct AuthRequest {
	/// HTTP headers (lowercase names)
	pub headers: HashMap<String, String>,
	/// Request path
	pub path: String,
	/// HTTP method
	pub method: String,
}

impl AuthRequest {
	/// Create a new auth request from HTTP components
	pub fn new(method: String, path: String) -> Self {
		Self {
			headers: HashMap::new(),
			path,
			method,
		}
	}

	/// Add a header
	pub fn with_header(mut self, key: String, value: String) -> Self {
		self.headers.insert(key, value);
		self
	}

	/// Get header value
	pub fn get_header(&self, key: &str) -> Option<&String> {
		self.headers.get(key)
	}

	/// Get API key from headers
	pub fn get_api_key(&self) -> Option<&String> {
		self.get_header("x-api-key")
			.or_else(|| self.get_header("X-API-Key"))
	}
}

/// Core authentication trait for custom auth implementations
#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
	/// Authenticate a request and return client context
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult;

	/// Get human-readable name for this authenticator
	fn name(&self) -> &str;
}
