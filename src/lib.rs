//! Catalog Server Library
//!
//! A small CRUD HTTP API over a single-table item catalog, with
//! in-memory and SQLite-backed storage behind a pluggable trait and a
//! static API-key check on the delete endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types - the most commonly used types
pub use catalog_types::{
	chrono,
	// Auth traits
	AuthContext,
	AuthRequest,
	AuthenticationResult,
	Authenticator,
	// Request/response types
	CreateItemRequest,
	// Primary domain entity
	Item,
	ItemResponse,
	ItemStats,
	ItemStatsResponse,
	NewItem,
	SecretString,
	// Storage errors
	StorageError,
	UpdateItemRequest,
};

// Service layer
pub use catalog_service::{ItemService, ItemServiceError};

// Storage layer
pub use catalog_storage::{
	traits::{ItemStorage, PriceSummary, StorageResult, StorageStats},
	MemoryStore, Storage,
};

#[cfg(feature = "sqlite")]
pub use catalog_storage::SqliteStore;

// API layer
pub use catalog_api::{create_router, AppState};
// Re-export auth implementations for convenience
pub use catalog_api::auth::{ApiKeyAuthenticator, AuthConfig, NoAuthenticator, ProtectedRoute};

// Config
pub use catalog_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for direct access to the member crates
pub mod types {
	pub use catalog_types::*;
}

pub mod storage {
	pub use catalog_storage::*;
}

pub mod config {
	pub use catalog_config::*;
}

pub mod api {
	pub use catalog_api::*;
}

pub mod service {
	pub use catalog_service::*;
}

/// Builder pattern for configuring the catalog server
///
/// Storage and authenticator default from settings when not provided:
/// the database URL scheme selects the backend, and the configured API
/// key backs an [`ApiKeyAuthenticator`].
pub struct ServerBuilder {
	settings: Option<Settings>,
	storage: Option<Arc<dyn Storage>>,
	authenticator: Option<Arc<dyn Authenticator>>,
}

impl Default for ServerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ServerBuilder {
	/// Create a new server builder
	pub fn new() -> Self {
		Self {
			settings: None,
			storage: None,
			authenticator: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Set custom storage
	pub fn with_storage<S>(mut self, storage: S) -> Self
	where
		S: Storage + 'static,
	{
		self.storage = Some(Arc::new(storage));
		self
	}

	/// Set custom authenticator
	pub fn with_auth<A>(mut self, authenticator: A) -> Self
	where
		A: Authenticator + 'static,
	{
		self.authenticator = Some(Arc::new(authenticator));
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use catalog_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build storage from the configured database URL
	async fn storage_from_settings(
		settings: &Settings,
	) -> Result<Arc<dyn Storage>, Box<dyn std::error::Error>> {
		let url = settings.database_url();

		#[cfg(feature = "sqlite")]
		if url.starts_with("sqlite") {
			let store = SqliteStore::connect(&url).await?;
			return Ok(Arc::new(store));
		}

		if url.starts_with("memory") {
			return Ok(Arc::new(MemoryStore::new()));
		}

		Err(format!("Unsupported database URL '{}'", url).into())
	}

	/// Assemble the application and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let storage = match self.storage {
			Some(storage) => storage,
			None => Arc::new(MemoryStore::new()) as Arc<dyn Storage>,
		};

		let authenticator = match self.authenticator {
			Some(authenticator) => authenticator,
			None => {
				Arc::new(ApiKeyAuthenticator::new(settings.api_key_secure())) as Arc<dyn Authenticator>
			},
		};

		let app_state = AppState {
			item_service: Arc::new(ItemService::new(Arc::clone(&storage))),
			storage,
			authenticator,
			auth_config: AuthConfig::default(),
		};

		let router = create_router(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the server: loading the .env
	/// file, loading configuration, initializing tracing, selecting the
	/// storage backend, and binding and serving the application.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.clone().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Environment profile: {:?} (debug={})",
			settings.environment.profile,
			settings.is_debug()
		);

		// Select the storage backend from the database URL
		if self.storage.is_none() {
			let storage = Self::storage_from_settings(&settings).await?;
			let healthy = storage
				.health_check()
				.await
				.map_err(|e| format!("Storage health check failed: {}", e))?;
			if !healthy {
				return Err("Storage backend is not healthy".into());
			}
			info!("Storage backend initialized: {}", settings.database_url());
			self.storage = Some(storage);
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /");
		info!("  GET    /health");
		info!("  GET    /items");
		info!("  POST   /items");
		info!("  GET    /items/{{id}}");
		info!("  PATCH  /items/{{id}}");
		info!("  DELETE /items/{{id}}");
		info!("  GET    /items/stats/summary");
		if cfg!(feature = "openapi") {
			info!("  GET    /swagger-ui");
			info!("  GET    /api-docs/openapi.json");
		}

		axum::serve(listener, app).await?;

		Ok(())
	}
}
