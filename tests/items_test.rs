mod common;

use axum::http::StatusCode;

use common::TestApp;

#[tokio::test]
async fn test_list_items_returns_seeded_catalog() {
    let app = TestApp::new().await;

    let response = app.server.get("/items").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["title"].as_str().unwrap(), "Lâmpadas");
    assert_eq!(items[1]["title"].as_str().unwrap(), "Pilhas e Baterias");
}

#[tokio::test]
async fn test_list_items_ordered_by_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/items").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_list_items_is_idempotent() {
    let app = TestApp::new().await;

    let first = app.server.get("/items").await;
    let second = app.server.get("/items").await;

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_item_image_urls_are_resolved() {
    let app = TestApp::new().await;

    let response = app.server.get("/items").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(
        body[0]["image_url"].as_str().unwrap(),
        "http://localhost:3333/uploads/lampadas.svg"
    );
}
