//! Handlers for the `/reviews` resource and the place-scoped review collection.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::{Place, Review, User};
use serde_json::Value;

use super::{delete_one, find_or_404, find_reference, get_one, insert, list_children, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/places/{place_id}/reviews
pub async fn list_by_place(
    StorageSession(mut session): StorageSession,
    Path(place_id): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    list_children::<Place, Review>(&mut session, &place_id).await
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Review>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/places/{place_id}/reviews
///
/// Both mandatory keys (`user_id`, then `text`) are checked before the user
/// lookup.
pub async fn create(
    StorageSession(mut session): StorageSession,
    Path(place_id): Path<String>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<Review>)> {
    let place = find_or_404::<Place>(&mut session, &place_id).await?;
    let body = body.into_object()?;
    let user_ref = payload::required(&body, "user_id")?;
    let text = payload::required(&body, "text")?;
    let user = find_reference::<User>(&mut session, user_ref).await?;
    let review = Review::new(place.id, user.id, payload::string("text", text)?);
    insert(&mut session, review, &body).await
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<Review>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<Review>(&mut session, &id).await
}
