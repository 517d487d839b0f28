//! SQLite storage implementation using sqlx

use crate::traits::{ItemStorage, PriceSummary, Storage, StorageError, StorageResult, StorageStats};
use async_trait::async_trait;
use catalog_types::{Item, NewItem};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

/// Items table schema, applied on connect
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
	id INTEGER PRIMARY KEY AUTOINCREMENT,
	name TEXT NOT NULL,
	description TEXT,
	price REAL NOT NULL,
	category TEXT
);
"#;

/// Row mirror of the items table
///
/// Kept private to this crate so sqlx stays out of the domain types.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
	id: i64,
	name: String,
	description: Option<String>,
	price: f64,
	category: Option<String>,
}

impl From<ItemRow> for Item {
	fn from(row: ItemRow) -> Self {
		Self {
			id: row.id,
			name: row.name,
			description: row.description,
			price: row.price,
			category: row.category,
		}
	}
}

/// SQLite-backed item store
#[derive(Clone)]
pub struct SqliteStore {
	pool: SqlitePool,
}

impl SqliteStore {
	/// Connect to the database at `url` and ensure the schema exists
	///
	/// The database file is created if missing. Accepts sqlx-style URLs
	/// such as `sqlite://app.db` or `sqlite::memory:`.
	pub async fn connect(url: &str) -> StorageResult<Self> {
		let options = SqliteConnectOptions::from_str(url)
			.map_err(|e| StorageError::Connection {
				message: format!("invalid database URL '{}': {}", url, e),
			})?
			.create_if_missing(true);

		// An in-memory database exists per connection; a second pooled
		// connection would see an empty schema.
		let max_connections = if url.contains(":memory:") { 1 } else { 5 };

		let pool = SqlitePoolOptions::new()
			.max_connections(max_connections)
			.connect_with(options)
			.await
			.map_err(|e| StorageError::Connection {
				message: e.to_string(),
			})?;

		sqlx::query(SCHEMA)
			.execute(&pool)
			.await
			.map_err(|e| StorageError::Operation {
				message: format!("schema initialization failed: {}", e),
			})?;

		info!("Connected to SQLite database at {}", url);
		Ok(Self { pool })
	}
}

fn operation_error(e: sqlx::Error) -> StorageError {
	StorageError::Operation {
		message: e.to_string(),
	}
}

#[async_trait]
impl ItemStorage for SqliteStore {
	async fn create_item(&self, item: NewItem) -> StorageResult<Item> {
		let row: ItemRow = sqlx::query_as(
			"INSERT INTO items (name, description, price, category) \
			 VALUES (?1, ?2, ?3, ?4) \
			 RETURNING id, name, description, price, category",
		)
		.bind(&item.name)
		.bind(&item.description)
		.bind(item.price)
		.bind(&item.category)
		.fetch_one(&self.pool)
		.await
		.map_err(operation_error)?;

		debug!("Created item {}", row.id);
		Ok(row.into())
	}

	async fn get_item(&self, item_id: i64) -> StorageResult<Option<Item>> {
		let row: Option<ItemRow> = sqlx::query_as(
			"SELECT id, name, description, price, category FROM items WHERE id = ?1",
		)
		.bind(item_id)
		.fetch_optional(&self.pool)
		.await
		.map_err(operation_error)?;

		Ok(row.map(Item::from))
	}

	async fn list_items(&self, skip: u64, limit: u64) -> StorageResult<Vec<Item>> {
		let rows: Vec<ItemRow> = sqlx::query_as(
			"SELECT id, name, description, price, category FROM items \
			 ORDER BY id LIMIT ?1 OFFSET ?2",
		)
		.bind(limit as i64)
		.bind(skip as i64)
		.fetch_all(&self.pool)
		.await
		.map_err(operation_error)?;

		Ok(rows.into_iter().map(Item::from).collect())
	}

	async fn update_item(&self, item: Item) -> StorageResult<()> {
		let result = sqlx::query(
			"UPDATE items SET name = ?1, description = ?2, price = ?3, category = ?4 \
			 WHERE id = ?5",
		)
		.bind(&item.name)
		.bind(&item.description)
		.bind(item.price)
		.bind(&item.category)
		.bind(item.id)
		.execute(&self.pool)
		.await
		.map_err(operation_error)?;

		if result.rows_affected() == 0 {
			return Err(StorageError::NotFound { id: item.id });
		}
		Ok(())
	}

	async fn remove_item(&self, item_id: i64) -> StorageResult<bool> {
		let result = sqlx::query("DELETE FROM items WHERE id = ?1")
			.bind(item_id)
			.execute(&self.pool)
			.await
			.map_err(operation_error)?;

		Ok(result.rows_affected() > 0)
	}

	async fn count_items(&self) -> StorageResult<usize> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM items")
			.fetch_one(&self.pool)
			.await
			.map_err(operation_error)?;

		Ok(count as usize)
	}

	async fn price_summary(&self) -> StorageResult<PriceSummary> {
		let (count, average, min, max): (i64, Option<f64>, Option<f64>, Option<f64>) =
			sqlx::query_as("SELECT COUNT(id), AVG(price), MIN(price), MAX(price) FROM items")
				.fetch_one(&self.pool)
				.await
				.map_err(operation_error)?;

		Ok(PriceSummary {
			total_items: count as usize,
			average_price: average,
			min_price: min,
			max_price: max,
		})
	}
}

#[async_trait]
impl Storage for SqliteStore {
	async fn health_check(&self) -> StorageResult<bool> {
		let result: Result<i64, sqlx::Error> =
			sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await;
		Ok(result.is_ok())
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_items: self.count_items().await?,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		self.pool.close().await;
		Ok(())
	}
}
