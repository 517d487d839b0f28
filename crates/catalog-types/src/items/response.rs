//! Item response models for the API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Item, ItemStats};

/// Response body for a single item
///
/// Optional fields serialize as explicit nulls so the response shape is
/// stable regardless of which fields are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemResponse {
	pub id: i64,
	pub name: String,
	pub description: Option<String>,
	pub price: f64,
	pub category: Option<String>,
}

impl From<&Item> for ItemResponse {
	fn from(item: &Item) -> Self {
		Self {
			id: item.id,
			name: item.name.clone(),
			description: item.description.clone(),
			price: item.price,
			category: item.category.clone(),
		}
	}
}

impl From<Item> for ItemResponse {
	fn from(item: Item) -> Self {
		Self {
			id: item.id,
			name: item.name,
			description: item.description,
			price: item.price,
			category: item.category,
		}
	}
}

/// Response body for GET /items/stats/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ItemStatsResponse {
	pub total_items: usize,
	pub average_price: f64,
	pub min_price: Option<f64>,
	pub max_price: Option<f64>,
}

impl From<ItemStats> for ItemStatsResponse {
	fn from(stats: ItemStats) -> Self {
		Self {
			total_items: stats.total_items,
			average_price: stats.average_price,
			min_price: stats.min_price,
			max_price: stats.max_price,
		}
	}
}
