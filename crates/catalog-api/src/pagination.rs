use serde::Deserialize;

pub const DEFAULT_SKIP: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;

/// Query parameters for GET /items
///
/// `skip` and `limit` select a contiguous slice in insertion order.
/// There is deliberately no upper cap on `limit`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
	pub skip: Option<u32>,
	pub limit: Option<u32>,
}

impl PaginationQuery {
	/// Effective (skip, limit) with defaults applied
	pub fn effective(&self) -> (u64, u64) {
		(
			self.skip.unwrap_or(DEFAULT_SKIP) as u64,
			self.limit.unwrap_or(DEFAULT_LIMIT) as u64,
		)
	}
}
