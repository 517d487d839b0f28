//! Item service
//!
//! Thin service layer wrapping the storage operations for items.

use std::sync::Arc;

use catalog_storage::Storage;
use catalog_types::{CreateItemRequest, Item, ItemStats, NewItem, StorageError, UpdateItemRequest};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ItemServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("item not found: {0}")]
	NotFound(i64),
}

impl From<StorageError> for ItemServiceError {
	fn from(e: StorageError) -> Self {
		match e {
			StorageError::NotFound { id } => ItemServiceError::NotFound(id),
			other => ItemServiceError::Storage(other.to_string()),
		}
	}
}

#[derive(Clone)]
pub struct ItemService {
	storage: Arc<dyn Storage>,
}

impl ItemService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// Create a new item; storage assigns the id
	pub async fn create_item(&self, request: CreateItemRequest) -> Result<Item, ItemServiceError> {
		let item = self.storage.create_item(NewItem::from(request)).await?;
		debug!("Created item {}", item.id);
		Ok(item)
	}

	/// Get a single item by id
	pub async fn get_item(&self, item_id: i64) -> Result<Item, ItemServiceError> {
		match self.storage.get_item(item_id).await? {
			Some(item) => Ok(item),
			None => Err(ItemServiceError::NotFound(item_id)),
		}
	}

	/// Get a contiguous slice of items in insertion order
	pub async fn list_items(&self, skip: u64, limit: u64) -> Result<Vec<Item>, ItemServiceError> {
		Ok(self.storage.list_items(skip, limit).await?)
	}

	/// Partially update an item: only supplied fields overwrite stored values
	pub async fn update_item(
		&self,
		item_id: i64,
		changes: &UpdateItemRequest,
	) -> Result<Item, ItemServiceError> {
		let mut item = self.get_item(item_id).await?;
		changes.apply_to(&mut item);
		self.storage.update_item(item.clone()).await?;
		debug!("Updated item {}", item_id);
		Ok(item)
	}

	/// Delete an item by id
	pub async fn delete_item(&self, item_id: i64) -> Result<(), ItemServiceError> {
		if !self.storage.remove_item(item_id).await? {
			return Err(ItemServiceError::NotFound(item_id));
		}
		debug!("Deleted item {}", item_id);
		Ok(())
	}

	/// Aggregate price statistics over all items
	///
	/// The average is rounded to two decimal places; an empty catalog
	/// reports an average of 0.0 and no min/max.
	pub async fn stats(&self) -> Result<ItemStats, ItemServiceError> {
		let summary = self.storage.price_summary().await?;

		Ok(ItemStats {
			total_items: summary.total_items,
			average_price: summary
				.average_price
				.map(|avg| (avg * 100.0).round() / 100.0)
				.unwrap_or(0.0),
			min_price: summary.min_price,
			max_price: summary.max_price,
		})
	}
}
