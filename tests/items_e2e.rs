//! E2E tests for the item CRUD endpoints

mod e2e;

use e2e::{TestServer, TEST_API_KEY};
use reqwest::Client;
use serde_json::{json, Value};

async fn create_item(client: &Client, base_url: &str, body: Value) -> reqwest::Response {
	client
		.post(format!("{}/items", base_url))
		.json(&body)
		.send()
		.await
		.unwrap()
}

#[tokio::test]
async fn test_create_item() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = create_item(
		&client,
		&server.base_url,
		json!({"name": "Widget", "description": "A nice widget", "price": 9.99}),
	)
	.await;

	assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["id"], 1);
	assert_eq!(body["name"], "Widget");
	assert_eq!(body["description"], "A nice widget");
	assert_eq!(body["price"], 9.99);
	assert!(body["category"].is_null());

	server.abort();
}

#[tokio::test]
async fn test_create_item_optional_fields() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = create_item(
		&client,
		&server.base_url,
		json!({"name": "Thing", "price": 5.0}),
	)
	.await;

	assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

	let body: Value = resp.json().await.unwrap();
	assert!(body["description"].is_null());
	assert!(body["category"].is_null());

	server.abort();
}

#[tokio::test]
async fn test_create_item_invalid_body() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	// Missing the required price field
	let resp = create_item(&client, &server.base_url, json!({"name": "No price"})).await;

	assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

	server.abort();
}

#[tokio::test]
async fn test_get_item() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	create_item(
		&client,
		&server.base_url,
		json!({"name": "Widget", "price": 9.99, "category": "tools"}),
	)
	.await;

	let resp = client
		.get(format!("{}/items/1", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["name"], "Widget");
	assert_eq!(body["category"], "tools");

	server.abort();
}

#[tokio::test]
async fn test_get_item_not_found() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/items/99", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "ITEM_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_list_items_empty() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/items", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);
	let body: Value = resp.json().await.unwrap();
	assert_eq!(body, json!([]));

	server.abort();
}

#[tokio::test]
async fn test_list_items_with_pagination() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	for (name, price) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
		create_item(&client, &server.base_url, json!({"name": name, "price": price})).await;
	}

	let resp = client
		.get(format!("{}/items?skip=1&limit=2", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	let items = body.as_array().unwrap();
	assert_eq!(items.len(), 2);
	assert_eq!(items[0]["name"], "B");
	assert_eq!(items[1]["name"], "C");

	server.abort();
}

#[tokio::test]
async fn test_list_items_default_limit_is_ten() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	for i in 0..12 {
		create_item(
			&client,
			&server.base_url,
			json!({"name": format!("item-{}", i), "price": 1.0}),
		)
		.await;
	}

	let resp = client
		.get(format!("{}/items", server.base_url))
		.send()
		.await
		.unwrap();

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body.as_array().unwrap().len(), 10);

	server.abort();
}

#[tokio::test]
async fn test_patch_item_partial_update() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	create_item(
		&client,
		&server.base_url,
		json!({"name": "Widget", "description": "A nice widget", "price": 9.99}),
	)
	.await;

	let resp = client
		.patch(format!("{}/items/1", server.base_url))
		.json(&json!({"price": 19.99}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["price"], 19.99);
	assert_eq!(body["name"], "Widget");
	assert_eq!(body["description"], "A nice widget");

	// The update is persisted
	let resp = client
		.get(format!("{}/items/1", server.base_url))
		.send()
		.await
		.unwrap();
	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["price"], 19.99);

	server.abort();
}

#[tokio::test]
async fn test_patch_item_not_found() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.patch(format!("{}/items/99", server.base_url))
		.json(&json!({"price": 1.0}))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}

#[tokio::test]
async fn test_delete_item_then_gone() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	create_item(&client, &server.base_url, json!({"name": "A", "price": 1.0})).await;

	let resp = client
		.delete(format!("{}/items/1", server.base_url))
		.header("x-api-key", TEST_API_KEY)
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

	let resp = client
		.get(format!("{}/items/1", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	// Deleting again reports not found
	let resp = client
		.delete(format!("{}/items/1", server.base_url))
		.header("x-api-key", TEST_API_KEY)
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
