//! End-to-end test utilities and shared fixtures

use axum::Router;
use catalog_server::{ApiKeyAuthenticator, SecretString, ServerBuilder};
use tokio::task::JoinHandle;

/// API key used by every spawned test server
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key-123";

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with in-memory storage and the test API key
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = ServerBuilder::new()
			.with_auth(ApiKeyAuthenticator::new(SecretString::from(TEST_API_KEY)))
			.start()
			.await?;

		Self::serve(router).await
	}

	/// Spawn a test server backed by a SQLite database at `url`
	#[allow(dead_code)]
	#[cfg(feature = "sqlite")]
	pub async fn spawn_with_sqlite(url: &str) -> Result<Self, Box<dyn std::error::Error>> {
		let storage = catalog_server::SqliteStore::connect(url).await?;

		let (router, _state) = ServerBuilder::new()
			.with_storage(storage)
			.with_auth(ApiKeyAuthenticator::new(SecretString::from(TEST_API_KEY)))
			.start()
			.await?;

		Self::serve(router).await
	}

	/// Spawn a test server that bypasses authentication entirely
	#[allow(dead_code)]
	pub async fn spawn_without_auth() -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = ServerBuilder::new()
			.with_auth(catalog_server::NoAuthenticator)
			.start()
			.await?;

		Self::serve(router).await
	}

	async fn serve(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
