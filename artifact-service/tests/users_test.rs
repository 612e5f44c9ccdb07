mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn list_users_starts_empty() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/users").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    app.cleanup().await;
}

#[tokio::test]
async fn create_user_returns_insertion_result() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/users"))
        .json(&json!({
            "email": "ada@example.com",
            "name": "Ada",
            "photo": "https://example.com/ada.png"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["acknowledged"], true);
    assert_eq!(body["insertedId"].as_str().unwrap().len(), 24);

    let (_, users) = app.get_json("/users").await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["_id"], body["insertedId"]);
    assert_eq!(users[0]["email"], "ada@example.com");
    assert_eq!(users[0]["name"], "Ada");
    assert_eq!(users[0]["photo"], "https://example.com/ada.png");

    app.cleanup().await;
}

#[tokio::test]
async fn create_user_keeps_only_known_fields() {
    let app = TestApp::spawn().await;

    app.client
        .post(app.url("/users"))
        .json(&json!({ "email": "bob@example.com", "role": "admin" }))
        .send()
        .await
        .expect("Failed to execute request");

    let (_, users) = app.get_json("/users").await;
    let user = users[0].as_object().unwrap();

    assert!(!user.contains_key("role"));
    assert_eq!(user["email"], "bob@example.com");
    assert_eq!(user["name"], Value::Null);
    assert_eq!(user["photo"], Value::Null);

    app.cleanup().await;
}

#[tokio::test]
async fn create_user_stores_values_as_sent() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/users"))
        .json(&json!({ "email": 123, "name": "A", "photo": "x" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let (_, users) = app.get_json("/users").await;
    assert_eq!(users[0]["email"], 123);
    assert_eq!(users[0]["name"], "A");
    assert_eq!(users[0]["photo"], "x");

    app.cleanup().await;
}
