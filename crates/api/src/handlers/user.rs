//! Handlers for the `/users` resource.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use hbnb_core::payload;
use hbnb_db::models::User;
use serde_json::Value;

use super::{delete_one, get_one, insert, update_one};
use crate::error::AppResult;
use crate::extract::{JsonBody, StorageSession};

/// GET /api/v1/users
pub async fn list(StorageSession(mut session): StorageSession) -> AppResult<Json<Vec<User>>> {
    Ok(Json(session.all::<User>().await?))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    get_one(&mut session, &id).await
}

/// POST /api/v1/users
///
/// Requires `email` then `password`.
pub async fn create(
    StorageSession(mut session): StorageSession,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<User>)> {
    let body = body.into_object()?;
    let email = payload::required(&body, "email")?;
    let password = payload::required(&body, "password")?;
    let user = User::new(
        payload::string("email", email)?,
        payload::string("password", password)?,
    );
    insert(&mut session, user, &body).await
}

/// PUT /api/v1/users/{id}
pub async fn update(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
    body: JsonBody,
) -> AppResult<Json<User>> {
    update_one(&mut session, &id, body).await
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    StorageSession(mut session): StorageSession,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_one::<User>(&mut session, &id).await
}
