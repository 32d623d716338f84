//! Handlers for the `/amenities` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::Amenity;
use serde_json::Value;

use super::{delete_one, get_one, insert, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/amenities
pub async fn list(StorageSession(mut session): StorageSession) -> AppResult<Json<Vec<Amenity>>> {
    Ok(Json(session.all::<Amenity>().await?))
}

/// GET /api/v1/amenities/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Amenity>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/amenities
pub async fn create(
    StorageSession(mut session): StorageSession,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    let body = body.into_object()?;
    let name = payload::required(&body, "name")?;
    let amenity = Amenity::new(payload::string("name", name)?);
    insert(&mut session, amenity, &body).await
}

/// PUT /api/v1/amenities/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<Amenity>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/amenities/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<Amenity>(&mut session, &id).await
}
