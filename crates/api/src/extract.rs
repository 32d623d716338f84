//! Request extractors shared by every resource handler.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use hbnb_core::payload::JsonObject;
use hbnb_db::Session;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// The request's unit of work on the storage adapter.
///
/// Acquired before the handler runs and released when the handler's future
/// completes, on success and error alike.
pub struct StorageSession(pub Session);

impl FromRequestParts<AppState> for StorageSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(StorageSession(state.storage.session().await?))
    }
}

/// A request body that should be a JSON object.
///
/// Extraction never fails; the body is only judged when the handler calls
/// [`JsonBody::into_object`], so "not found" checks that precede it in a
/// handler still win over a bad body.
pub struct JsonBody(Option<JsonObject>);

impl JsonBody {
    /// Decode `bytes` if the headers declare JSON and the payload is an object.
    pub fn parse(headers: &HeaderMap, bytes: &[u8]) -> Self {
        if !is_json_content_type(headers) {
            return JsonBody(None);
        }
        JsonBody(serde_json::from_slice::<JsonObject>(bytes).ok())
    }

    /// The decoded object, or `400 Not a JSON`.
    pub fn into_object(self) -> AppResult<JsonObject> {
        self.0.ok_or_else(|| AppError::bad_request("Not a JSON"))
    }
}

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(JsonBody::parse(&headers, &bytes)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Failed to read request body");
                Ok(JsonBody(None))
            }
        }
    }
}

/// `application/json`, optionally with parameters such as `charset`, or any
/// `+json` structured suffix.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
