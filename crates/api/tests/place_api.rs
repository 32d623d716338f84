//! HTTP-level integration tests for `/places` and `/cities/{city_id}/places`.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    body_json, build_test_app, create, delete, get, id_of, post_json, put_json, seed_city_and_user,
    send_raw,
};
use hbnb_db::Storage;
use serde_json::json;

const MISSING_ID: &str = "00000000-0000-0000-0000-000000000000";

#[tokio::test]
async fn create_place_returns_201_with_defaults() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;

    let response = post_json(
        build_test_app(storage),
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": user["id"], "name": "Loft", "price_by_night": 120, "latitude": 37.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Loft");
    assert_eq!(json["city_id"], city["id"]);
    assert_eq!(json["user_id"], user["id"]);
    assert_eq!(json["price_by_night"], 120);
    assert_eq!(json["latitude"], 37.5);
    assert_eq!(json["number_rooms"], 0);
    assert!(json["description"].is_null());
    assert!(json["longitude"].is_null());
}

#[tokio::test]
async fn create_place_under_missing_city_returns_404() {
    let response = send_raw(
        build_test_app(Storage::memory()),
        Method::POST,
        &format!("/api/v1/cities/{MISSING_ID}/places"),
        None,
        "",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_place_validates_in_order() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;
    let uri = format!("/api/v1/cities/{}/places", id_of(&city));

    let response = send_raw(
        build_test_app(storage.clone()),
        Method::POST,
        &uri,
        Some("text/plain"),
        "Loft",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Not a JSON");

    let response = post_json(build_test_app(storage.clone()), &uri, json!({"name": "Loft"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing user_id");

    // An unknown user wins over the missing name.
    let response = post_json(build_test_app(storage.clone()), &uri, json!({"user_id": MISSING_ID})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(build_test_app(storage), &uri, json!({"user_id": user["id"]})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing name");
}

#[tokio::test]
async fn create_place_with_wrong_integer_type_returns_400() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;

    let response = post_json(
        build_test_app(storage),
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": user["id"], "name": "Loft", "max_guest": "four"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid max_guest");
}

#[tokio::test]
async fn list_places_of_city() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;
    let uri = format!("/api/v1/cities/{}/places", id_of(&city));
    let place = create(&storage, &uri, json!({"user_id": user["id"], "name": "Loft"})).await;

    let response = get(build_test_app(storage.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([place]));

    let response = get(
        build_test_app(storage),
        &format!("/api/v1/cities/{MISSING_ID}/places"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_place_ignores_owner_and_city() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;
    let place = create(
        &storage,
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": user["id"], "name": "Loft"}),
    )
    .await;

    let response = put_json(
        build_test_app(storage),
        &format!("/api/v1/places/{}", id_of(&place)),
        json!({
            "name": "Penthouse",
            "description": "Top floor",
            "number_rooms": 3,
            "user_id": MISSING_ID,
            "city_id": MISSING_ID
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Penthouse");
    assert_eq!(json["description"], "Top floor");
    assert_eq!(json["number_rooms"], 3);
    assert_eq!(json["user_id"], user["id"]);
    assert_eq!(json["city_id"], city["id"]);
}

#[tokio::test]
async fn delete_place_then_404() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;
    let place = create(
        &storage,
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": user["id"], "name": "Loft"}),
    )
    .await;
    let uri = format!("/api/v1/places/{}", id_of(&place));

    let response = delete(build_test_app(storage.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));

    assert_eq!(get(build_test_app(storage.clone()), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(build_test_app(storage), &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_user_removes_their_places() {
    let storage = Storage::memory();
    let (_, city, user) = seed_city_and_user(&storage).await;
    let place = create(
        &storage,
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": user["id"], "name": "Loft"}),
    )
    .await;

    let response = delete(
        build_test_app(storage.clone()),
        &format!("/api/v1/users/{}", id_of(&user)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(storage),
        &format!("/api/v1/places/{}", id_of(&place)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
