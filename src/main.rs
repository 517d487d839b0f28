//! Catalog Server
//!
//! Main entry point for the catalog server

use catalog_server::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	ServerBuilder::new().start_server().await
}
