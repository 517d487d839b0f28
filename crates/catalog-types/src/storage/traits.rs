//! Storage traits for pluggable storage implementations

use crate::items::{Item, NewItem};
use async_trait::async_trait;

pub use super::errors::StorageError;

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_items: usize,
}

/// Price aggregates over all stored items
///
/// The aggregate fields are `None` when storage is empty, matching what
/// SQL `AVG`/`MIN`/`MAX` return for an empty table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
	pub total_items: usize,
	pub average_price: Option<f64>,
	pub min_price: Option<f64>,
	pub max_price: Option<f64>,
}

/// Trait for item storage operations
#[async_trait]
pub trait ItemStorageTrait: Send + Sync {
	/// Persist a new item; storage assigns the id
	async fn create_item(&self, item: NewItem) -> StorageResult<Item>;

	/// Get an item by id
	async fn get_item(&self, item_id: i64) -> StorageResult<Option<Item>>;

	/// Get a contiguous slice of items in insertion order
	async fn list_items(&self, skip: u64, limit: u64) -> StorageResult<Vec<Item>>;

	/// Replace an existing item (matched by id)
	async fn update_item(&self, item: Item) -> StorageResult<()>;

	/// Remove an item by id; returns whether a row was removed
	async fn remove_item(&self, item_id: i64) -> StorageResult<bool>;

	/// Get item count
	async fn count_items(&self) -> StorageResult<usize>;

	/// Get price aggregates across all items
	async fn price_summary(&self) -> StorageResult<PriceSummary>;
}

/// Main storage trait that combines item operations with lifecycle hooks
#[async_trait]
pub trait StorageTrait: ItemStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage connection
	async fn close(&self) -> StorageResult<()>;
}
