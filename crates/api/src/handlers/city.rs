//! Handlers for the `/cities` resource and the state-scoped city collection.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::{City, State};
use serde_json::Value;

use super::{delete_one, find_or_404, get_one, insert, list_children, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/states/{state_id}/cities
pub async fn list_by_state(
    StorageSession(mut session): StorageSession,
    Path(state_id): Path<String>,
) -> AppResult<Json<Vec<City>>> {
    list_children::<State, City>(&mut session, &state_id).await
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<City>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/states/{state_id}/cities
///
/// `state_id` comes from the path; a `state_id` in the body is ignored.
pub async fn create(
    StorageSession(mut session): StorageSession,
    Path(state_id): Path<String>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<City>)> {
    let state = find_or_404::<State>(&mut session, &state_id).await?;
    let body = body.into_object()?;
    let name = payload::required(&body, "name")?;
    let city = City::new(state.id, payload::string("name", name)?);
    insert(&mut session, city, &body).await
}

/// PUT /api/v1/cities/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<City>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/cities/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<City>(&mut session, &id).await
}
