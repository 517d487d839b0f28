//! Catalog Types
//!
//! Shared models and traits for the catalog server.
//! This crate contains all domain models organized by business entity.

pub mod auth;
pub mod items;
pub mod models;
pub mod storage;

// Re-export chrono for convenience
pub use chrono;

// Re-export commonly used types for convenience
pub use items::{
	CreateItemRequest, Item, ItemResponse, ItemStats, ItemStatsResponse, NewItem,
	UpdateItemRequest,
};

pub use auth::{AuthContext, AuthRequest, AuthenticationResult, Authenticator};

pub use models::SecretString;

pub use storage::{
	ItemStorageTrait, PriceSummary, StorageError, StorageResult, StorageStats, StorageTrait,
};
