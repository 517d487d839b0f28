//! Catalog Service
//!
//! Business logic between the API handlers and the storage layer.

pub mod item;

pub use item::{ItemService, ItemServiceError};
