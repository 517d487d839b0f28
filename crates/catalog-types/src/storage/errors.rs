//! Error types for storage operations

use thiserror::Error;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Item not found: {id}")]
	NotFound { id: i64 },
	#[error("Connection error: {message}")]
	Connection { message: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}
