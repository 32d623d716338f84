//! HTTP-level integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, id_of, post_json, put_json};
use hbnb_db::Storage;
use serde_json::json;

#[tokio::test]
async fn create_user_returns_201_with_optional_names_null() {
    let response = post_json(
        build_test_app(Storage::memory()),
        "/api/v1/users",
        json!({"email": "guest@hbnb.io", "password": "secret"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "guest@hbnb.io");
    assert_eq!(json["password"], "secret");
    assert!(json["first_name"].is_null());
    assert!(json["last_name"].is_null());
}

#[tokio::test]
async fn create_user_accepts_names() {
    let storage = Storage::memory();
    let json = create(
        &storage,
        "/api/v1/users",
        json!({"email": "b@b.io", "password": "pw", "first_name": "Betty", "last_name": "Holberton"}),
    )
    .await;

    assert_eq!(json["first_name"], "Betty");
    assert_eq!(json["last_name"], "Holberton");
}

#[tokio::test]
async fn create_user_checks_email_before_password() {
    let storage = Storage::memory();

    let response = post_json(build_test_app(storage.clone()), "/api/v1/users", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing email");

    let response = post_json(
        build_test_app(storage),
        "/api/v1/users",
        json!({"email": "a@b.c"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing password");
}

#[tokio::test]
async fn update_user_keeps_email() {
    let storage = Storage::memory();
    let user = create(
        &storage,
        "/api/v1/users",
        json!({"email": "old@hbnb.io", "password": "pw"}),
    )
    .await;

    let response = put_json(
        build_test_app(storage),
        &format!("/api/v1/users/{}", id_of(&user)),
        json!({"email": "new@hbnb.io", "password": "rotated", "first_name": "Ada"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "old@hbnb.io");
    assert_eq!(json["password"], "rotated");
    assert_eq!(json["first_name"], "Ada");
}

#[tokio::test]
async fn list_get_and_delete_users() {
    let storage = Storage::memory();
    let user = create(
        &storage,
        "/api/v1/users",
        json!({"email": "a@b.c", "password": "pw"}),
    )
    .await;
    let uri = format!("/api/v1/users/{}", id_of(&user));

    let response = get(build_test_app(storage.clone()), "/api/v1/users").await;
    assert_eq!(body_json(response).await, json!([user.clone()]));

    let response = get(build_test_app(storage.clone()), &uri).await;
    assert_eq!(body_json(response).await, user);

    let response = delete(build_test_app(storage.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));

    let response = get(build_test_app(storage), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
