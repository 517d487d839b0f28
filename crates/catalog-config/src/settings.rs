//! Configuration settings structures

use crate::configurable_value::ConfigurableValue;
use catalog_types::SecretString;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Database URL used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";

/// Well-known development API key used when `API_KEY` is not set
pub const DEFAULT_API_KEY: &str = "dev-key-123";

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub database: DatabaseSettings,
	pub auth: AuthSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Database configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseSettings {
	/// Database URL; the scheme selects the storage backend
	/// (`sqlite://...` or `memory://`)
	///
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "DATABASE_URL"}`
	/// - Plain value: `{"type": "plain", "value": "sqlite://app.db"}`
	pub url: ConfigurableValue,
}

/// Authentication configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthSettings {
	/// Static API key gating the protected routes
	///
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-key-here"}`
	pub api_key: ConfigurableValue,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 8000,
			},
			database: DatabaseSettings {
				url: ConfigurableValue::from_env("DATABASE_URL"),
			},
			auth: AuthSettings {
				api_key: ConfigurableValue::from_env("API_KEY"),
			},
			environment: EnvironmentSettings {
				profile: EnvironmentProfile::Development,
				debug: true,
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Get the database URL, falling back to the bundled SQLite file
	pub fn database_url(&self) -> String {
		match self.database.url.resolve() {
			Ok(url) => url,
			Err(_) => DEFAULT_DATABASE_URL.to_string(),
		}
	}

	/// Get the API key for secure handling
	///
	/// Falls back to the well-known development key when the configured
	/// source cannot be resolved, which is only acceptable outside
	/// production.
	pub fn api_key_secure(&self) -> SecretString {
		match self.auth.api_key.resolve_for_secret() {
			Ok(key) => key,
			Err(_) => {
				warn!(
					"API key not found via {}, falling back to the insecure development key",
					self.auth.api_key.description()
				);
				SecretString::from(DEFAULT_API_KEY)
			},
		}
	}
}
