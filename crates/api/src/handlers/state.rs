//! Handlers for the `/states` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::State;
use serde_json::Value;

use super::{delete_one, get_one, insert, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/states
pub async fn list(StorageSession(mut session): StorageSession) -> AppResult<Json<Vec<State>>> {
    Ok(Json(session.all::<State>().await?))
}

/// GET /api/v1/states/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<State>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/states
pub async fn create(
    StorageSession(mut session): StorageSession,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<State>)> {
    let body = body.into_object()?;
    let name = payload::required(&body, "name")?;
    let state = State::new(payload::string("name", name)?);
    insert(&mut session, state, &body).await
}

/// PUT /api/v1/states/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<State>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/states/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<State>(&mut session, &id).await
}
