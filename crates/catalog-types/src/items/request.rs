//! Item request models for the API layer

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Item, NewItem};

/// Request body for POST /items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateItemRequest {
	/// Required display name
	pub name: String,

	/// Optional free-form description
	#[serde(default)]
	pub description: Option<String>,

	/// Required price
	pub price: f64,

	/// Optional category label
	#[serde(default)]
	pub category: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
	fn from(request: CreateItemRequest) -> Self {
		Self {
			name: request.name,
			description: request.description,
			price: request.price,
			category: request.category,
		}
	}
}

/// Request body for PATCH /items/{id}
///
/// All fields are optional; only the fields present in the request
/// overwrite stored values. Absent and explicit-null fields both
/// deserialize to `None` and leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateItemRequest {
	#[serde(default)]
	pub name: Option<String>,

	#[serde(default)]
	pub description: Option<String>,

	#[serde(default)]
	pub price: Option<f64>,

	#[serde(default)]
	pub category: Option<String>,
}

impl UpdateItemRequest {
	/// Merge the supplied fields into an existing item
	pub fn apply_to(&self, item: &mut Item) {
		if let Some(name) = &self.name {
			item.name = name.clone();
		}
		if let Some(description) = &self.description {
			item.description = Some(description.clone());
		}
		if let Some(price) = self.price {
			item.price = price;
		}
		if let Some(category) = &self.category {
			item.category = Some(category.clone());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_item() -> Item {
		Item {
			id: 1,
			name: "Widget".to_string(),
			description: Some("A nice widget".to_string()),
			price: 9.99,
			category: Some("tools".to_string()),
		}
	}

	#[test]
	fn test_apply_to_overwrites_only_supplied_fields() {
		let mut item = sample_item();
		let update = UpdateItemRequest {
			price: Some(19.99),
			..Default::default()
		};

		update.apply_to(&mut item);
		assert_eq!(item.price, 19.99);
		assert_eq!(item.name, "Widget");
		assert_eq!(item.description.as_deref(), Some("A nice widget"));
		assert_eq!(item.category.as_deref(), Some("tools"));
	}

	#[test]
	fn test_apply_to_empty_update_is_noop() {
		let mut item = sample_item();
		UpdateItemRequest::default().apply_to(&mut item);
		assert_eq!(item, sample_item());
	}

	#[test]
	fn test_explicit_null_leaves_field_untouched() {
		// "description": null deserializes to None, same as an absent field
		let update: UpdateItemRequest =
			serde_json::from_str(r#"{"name": "Gadget", "description": null}"#).unwrap();

		let mut item = sample_item();
		update.apply_to(&mut item);
		assert_eq!(item.name, "Gadget");
		assert_eq!(item.description.as_deref(), Some("A nice widget"));
	}

	#[test]
	fn test_create_request_defaults_optional_fields() {
		let request: CreateItemRequest =
			serde_json::from_str(r#"{"name": "Thing", "price": 5.0}"#).unwrap();
		assert_eq!(request.description, None);
		assert_eq!(request.category, None);

		let new_item = NewItem::from(request);
		assert_eq!(new_item.name, "Thing");
		assert_eq!(new_item.price, 5.0);
	}
}
