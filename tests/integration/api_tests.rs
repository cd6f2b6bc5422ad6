//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api::create_router, AppConfig, AppState, Catalog};

/// Router over a catalog seeded with two titles and two users
fn app() -> Router {
    let mut catalog = Catalog::new();
    catalog.add_book("The Alchemist", 3).unwrap();
    catalog.add_book("1984", 2).unwrap();
    catalog.register_user("alice").unwrap();
    catalog.register_user("bob").unwrap();
    create_router(AppState::new(AppConfig::default(), catalog))
}

/// Helper to send a request and decode the JSON response
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn borrow(app: &Router, user: &str, title: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/loans", Some(json!({ "user": user, "title": title }))).await
}

async fn give_back(app: &Router, user: &str, title: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/loans/return",
        Some(json!({ "user": user, "title": title })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_list_available_books() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "title": "The Alchemist", "copies": 3 },
            { "title": "1984", "copies": 2 }
        ])
    );
}

#[tokio::test]
async fn test_add_book_defaults_to_one_copy() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "title": "Dune" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["copies"], 1);

    let (_, stats) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(stats["total_copies"], 6);
    assert_eq!(stats["titles"], 3);
}

#[tokio::test]
async fn test_add_duplicate_book() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "1984", "copies": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemAlreadyExists");

    let (_, book) = send(&app, Method::GET, "/books/1984", None).await;
    assert_eq!(book["copies"], 2);
}

#[tokio::test]
async fn test_add_book_invalid_copies() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Zero Copies Book", "copies": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);
}

#[tokio::test]
async fn test_add_book_copies_out_of_range() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Dune", "copies": 9_223_372_036_854_775_808u64 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_malformed_loan_body() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/loans")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"user": "alice""#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "BadValue");

    let (_, loans) = send(&app, Method::GET, "/users/alice/loans", None).await;
    assert_eq!(loans["borrowed"], json!([]));
}

#[tokio::test]
async fn test_stats_after_huge_additions() {
    let app = create_router(AppState::new(AppConfig::default(), Catalog::new()));
    for title in ["A", "B"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/books",
            Some(json!({ "title": title, "copies": i64::MAX })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::POST, "/books", Some(json!({ "title": "C", "copies": 2 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 18);

    let (status, _) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_remove_book() {
    let app = app();
    let (status, _) = send(&app, Method::DELETE, "/books/The%20Alchemist", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/books/The%20Alchemist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/books/The%20Alchemist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchItem");
}

#[tokio::test]
async fn test_register_and_unregister_user() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/users", Some(json!({ "user": "carol" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["borrowed"], json!([]));

    let (status, _) = send(&app, Method::POST, "/users", Some(json!({ "user": "carol" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::DELETE, "/users/carol", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/users/carol/loans", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");
}

#[tokio::test]
async fn test_two_borrowers_scenario() {
    let app = app();

    let (status, body) = borrow(&app, "alice", "1984").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["copies_left"], 1);

    let (_, body) = borrow(&app, "bob", "1984").await;
    assert_eq!(body["copies_left"], 0);

    let (status, body) = borrow(&app, "alice", "1984").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemNotAvailable");

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books, json!([{ "title": "The Alchemist", "copies": 3 }]));

    let (status, body) = give_back(&app, "bob", "1984").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["copies_left"], 1);

    let (_, loans) = send(&app, Method::GET, "/users/bob/loans", None).await;
    assert_eq!(loans["borrowed"], json!([]));
}

#[tokio::test]
async fn test_borrow_unknown_user_or_title() {
    let app = app();
    let (status, _) = borrow(&app, "unknown", "1984").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = borrow(&app, "alice", "Never Added").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_return_book_not_borrowed() {
    let app = app();
    let (status, body) = give_back(&app, "alice", "1984").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "book '1984' was not borrowed by user 'alice'");
}

#[tokio::test]
async fn test_unregister_keeps_copies_off_the_shelf() {
    let app = app();
    borrow(&app, "alice", "The Alchemist").await;

    let (status, body) = send(&app, Method::DELETE, "/users/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unreturned"], json!(["The Alchemist"]));

    let (_, book) = send(&app, Method::GET, "/books/The%20Alchemist", None).await;
    assert_eq!(book["copies"], 2);

    let (_, stats) = send(&app, Method::GET, "/stats", None).await;
    assert_eq!(stats["total_copies"], 4);
    assert_eq!(stats["users"], 1);
}

#[tokio::test]
async fn test_return_after_book_removed() {
    let app = app();
    borrow(&app, "alice", "1984").await;
    send(&app, Method::DELETE, "/books/1984", None).await;

    let (status, _) = give_back(&app, "alice", "1984").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, loans) = send(&app, Method::GET, "/users/alice/loans", None).await;
    assert_eq!(loans["borrowed"], json!(["1984"]));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/loans"].is_object());
}
