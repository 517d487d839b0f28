pub mod common;
pub mod health;
pub mod items;

pub use health::{health, root};
pub use items::{delete_item, get_item_by_id, get_item_stats, get_items, patch_item, post_items};
