//! In-memory storage implementation using DashMap

use crate::traits::{ItemStorage, PriceSummary, Storage, StorageError, StorageResult, StorageStats};
use async_trait::async_trait;
use catalog_types::{Item, NewItem};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// In-memory item store
///
/// Ids are assigned from a monotonic counter starting at 1, matching the
/// SQLite backend, so id order is insertion order.
#[derive(Clone)]
pub struct MemoryStore {
	items: Arc<DashMap<i64, Item>>,
	next_id: Arc<AtomicI64>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			items: Arc::new(DashMap::new()),
			next_id: Arc::new(AtomicI64::new(0)),
		}
	}

	/// All items sorted by id (insertion order)
	fn sorted_items(&self) -> Vec<Item> {
		let mut items: Vec<Item> = self.items.iter().map(|entry| entry.value().clone()).collect();
		items.sort_by_key(|item| item.id);
		items
	}
}

impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ItemStorage for MemoryStore {
	async fn create_item(&self, item: NewItem) -> StorageResult<Item> {
		let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
		let item = item.into_item(id);
		self.items.insert(id, item.clone());
		Ok(item)
	}

	async fn get_item(&self, item_id: i64) -> StorageResult<Option<Item>> {
		Ok(self.items.get(&item_id).map(|entry| entry.clone()))
	}

	async fn list_items(&self, skip: u64, limit: u64) -> StorageResult<Vec<Item>> {
		Ok(self
			.sorted_items()
			.into_iter()
			.skip(skip as usize)
			.take(limit as usize)
			.collect())
	}

	async fn update_item(&self, item: Item) -> StorageResult<()> {
		match self.items.get_mut(&item.id) {
			Some(mut entry) => {
				*entry = item;
				Ok(())
			},
			None => Err(StorageError::NotFound { id: item.id }),
		}
	}

	async fn remove_item(&self, item_id: i64) -> StorageResult<bool> {
		Ok(self.items.remove(&item_id).is_some())
	}

	async fn count_items(&self) -> StorageResult<usize> {
		Ok(self.items.len())
	}

	async fn price_summary(&self) -> StorageResult<PriceSummary> {
		let total_items = self.items.len();
		if total_items == 0 {
			return Ok(PriceSummary {
				total_items: 0,
				average_price: None,
				min_price: None,
				max_price: None,
			});
		}

		let mut sum = 0.0;
		let mut min = f64::INFINITY;
		let mut max = f64::NEG_INFINITY;
		for entry in self.items.iter() {
			let price = entry.value().price;
			sum += price;
			min = min.min(price);
			max = max.max(price);
		}

		Ok(PriceSummary {
			total_items,
			average_price: Some(sum / total_items as f64),
			min_price: Some(min),
			max_price: Some(max),
		})
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check that the map is accessible
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_items: self.count_items().await?,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		// Nothing to close for the memory store
		Ok(())
	}
}
