//! Handlers for the `/places` resource and the city-scoped place collection.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::{City, Place, User};
use serde_json::Value;

use super::{delete_one, find_or_404, find_reference, get_one, insert, list_children, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/cities/{city_id}/places
pub async fn list_by_city(
    StorageSession(mut session): StorageSession,
    Path(city_id): Path<String>,
) -> AppResult<Json<Vec<Place>>> {
    list_children::<City, Place>(&mut session, &city_id).await
}

/// GET /api/v1/places/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Place>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/cities/{city_id}/places
///
/// Checks run in order: city exists, body is JSON, `user_id` present, the
/// user exists, `name` present.
pub async fn create(
    StorageSession(mut session): StorageSession,
    Path(city_id): Path<String>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<Place>)> {
    let city = find_or_404::<City>(&mut session, &city_id).await?;
    let body = body.into_object()?;
    let user_ref = payload::required(&body, "user_id")?;
    let user = find_reference::<User>(&mut session, user_ref).await?;
    let name = payload::required(&body, "name")?;
    let place = Place::new(city.id, user.id, payload::string("name", name)?);
    insert(&mut session, place, &body).await
}

/// PUT /api/v1/places/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<Place>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/places/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<Place>(&mut session, &id).await
}
