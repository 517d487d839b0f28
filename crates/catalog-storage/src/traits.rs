//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use catalog_types::storage::{
	ItemStorageTrait as ItemStorage, PriceSummary, StorageError, StorageResult, StorageStats,
	StorageTrait as Storage,
};
