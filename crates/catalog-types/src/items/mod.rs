//! Core Item domain model

pub mod request;
pub mod response;

pub use request::{CreateItemRequest, UpdateItemRequest};
pub use response::{ItemResponse, ItemStatsResponse};

/// Core Item domain model
///
/// This represents a persisted catalog item. It is created from a
/// [`NewItem`] by the storage layer (which assigns the id) and converted
/// to [`ItemResponse`] at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
	/// Surrogate key, assigned by storage. Unique and immutable.
	pub id: i64,

	/// Required display name
	pub name: String,

	/// Optional free-form description
	pub description: Option<String>,

	/// Required price
	pub price: f64,

	/// Optional category label
	pub category: Option<String>,
}

/// An item that has not been persisted yet (no id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
	pub name: String,
	pub description: Option<String>,
	pub price: f64,
	pub category: Option<String>,
}

impl NewItem {
	/// Attach the storage-assigned id, producing a persisted [`Item`]
	pub fn into_item(self, id: i64) -> Item {
		Item {
			id,
			name: self.name,
			description: self.description,
			price: self.price,
			category: self.category,
		}
	}
}

/// Aggregate statistics over all items
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStats {
	/// Number of items in storage
	pub total_items: usize,

	/// Mean price, rounded to two decimal places; 0.0 when empty
	pub average_price: f64,

	/// Lowest price; `None` when empty
	pub min_price: Option<f64>,

	/// Highest price; `None` when empty
	pub max_price: Option<f64>,
}
