use std::sync::Arc;

use catalog_service::ItemService;
use catalog_storage::Storage;
use catalog_types::Authenticator;

use crate::auth::AuthConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub item_service: Arc<ItemService>,
	pub storage: Arc<dyn Storage>,
	pub authenticator: Arc<dyn Authenticator>,
	pub auth_config: AuthConfig,
}
