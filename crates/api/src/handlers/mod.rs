//! Request handlers for the HBnB resources.
//!
//! Each submodule provides the async handler functions (list, get_by_id,
//! create, update, delete) for one entity type. The steps every resource
//! shares live here as generic helpers over [`Entity`].

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod stats;
pub mod user;

use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload::{self, JsonObject};
use hbnb_core::types::{parse_id, DbId};
use hbnb_db::{Entity, Session};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;

/// Load a record by a raw path id. Absent and malformed ids are both 404.
pub(crate) async fn find_or_404<E: Entity>(session: &mut Session, raw_id: &str) -> AppResult<E> {
    let not_found = || AppError::not_found(E::KIND.name(), raw_id);
    let id = parse_id(raw_id).ok_or_else(not_found)?;
    session.get::<E>(id).await?.ok_or_else(not_found)
}

/// Resolve a foreign id embedded in a request body to an existing record.
pub(crate) async fn find_reference<E: Entity>(
    session: &mut Session,
    value: &Value,
) -> AppResult<E> {
    let not_found = || AppError::not_found(E::KIND.name(), value);
    let id = payload::reference(value).ok_or_else(not_found)?;
    session.get::<E>(id).await?.ok_or_else(not_found)
}

/// GET a single record.
pub(crate) async fn get_one<E: Entity>(session: &mut Session, raw_id: &str) -> AppResult<Json<E>> {
    Ok(Json(find_or_404::<E>(session, raw_id).await?))
}

/// GET a parent-scoped collection, failing with 404 if the parent is absent.
pub(crate) async fn list_children<P: Entity, C: Entity>(
    session: &mut Session,
    raw_parent_id: &str,
) -> AppResult<Json<Vec<C>>> {
    let parent = find_or_404::<P>(session, raw_parent_id).await?;
    Ok(Json(session.all_by_parent::<C>(parent.id()).await?))
}

/// Persist a newly built record and answer `201 Created`.
pub(crate) async fn insert<E: Entity>(
    session: &mut Session,
    mut entity: E,
    body: &JsonObject,
) -> AppResult<(StatusCode, Json<E>)> {
    entity.apply_patch(body)?;
    session.save(&mut entity).await?;
    tracing::info!(entity = %E::KIND, id = %entity.id(), "Created");
    Ok((StatusCode::CREATED, Json(entity)))
}

/// PUT: apply the body to an existing record, skipping immutable keys.
pub(crate) async fn update_one<E: Entity>(
    session: &mut Session,
    raw_id: &str,
    body: JsonBody,
) -> AppResult<Json<E>> {
    let mut entity = find_or_404::<E>(session, raw_id).await?;
    let body = body.into_object()?;
    entity.apply_patch(&body)?;
    session.save(&mut entity).await?;
    Ok(Json(entity))
}

/// DELETE: remove an existing record and answer `{}`.
pub(crate) async fn delete_one<E: Entity>(session: &mut Session, raw_id: &str) -> AppResult<Json<Value>> {
    let entity = find_or_404::<E>(session, raw_id).await?;
    let id: DbId = entity.id();
    if !session.delete::<E>(id).await? {
        // Removed by a concurrent request between the lookup and the delete.
        return Err(AppError::not_found(E::KIND.name(), id));
    }
    tracing::info!(entity = %E::KIND, %id, "Deleted");
    Ok(Json(json!({})))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Fallback for a known path called with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
