#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use hbnb_api::config::{ServerConfig, StorageKind};
use hbnb_api::router::build_app_router;
use hbnb_api::state::AppState;
use hbnb_db::Storage;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        storage: StorageKind::Memory,
        database_url: None,
        db_max_connections: 1,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `storage`.
///
/// Clones of one [`Storage::memory`] handle share their records, so a test
/// builds a fresh router per request against the same store.
pub fn build_test_app(storage: Storage) -> Router {
    build_app_router(AppState::new(storage), &test_config())
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send_raw(app, Method::POST, uri, Some("application/json"), json.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send_raw(app, Method::PUT, uri, Some("application/json"), json.to_string()).await
}

/// Send an arbitrary body with an optional content type.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    send(app, builder.body(Body::from(body.into())).unwrap()).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `json` to `uri`, assert `201 Created` and return the created record.
pub async fn create(storage: &Storage, uri: &str, json: Value) -> Value {
    let response = post_json(build_test_app(storage.clone()), uri, json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}

/// The `id` of a serialized record.
pub fn id_of(record: &Value) -> String {
    record["id"].as_str().unwrap().to_string()
}

/// Create a state, a city in it and a user; returns `(state, city, user)`.
pub async fn seed_city_and_user(storage: &Storage) -> (Value, Value, Value) {
    let state = create(storage, "/api/v1/states", serde_json::json!({"name": "California"})).await;
    let city = create(
        storage,
        &format!("/api/v1/states/{}/cities", id_of(&state)),
        serde_json::json!({"name": "Fremont"}),
    )
    .await;
    let user = create(
        storage,
        "/api/v1/users",
        serde_json::json!({"email": "a@b.c", "password": "pw"}),
    )
    .await;
    (state, city, user)
}
