//! Route definitions for the `/places` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{place, review};
use crate::state::AppState;

/// Routes mounted at `/places`.
///
/// ```text
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /{place_id}/reviews    -> review::list_by_place
/// POST   /{place_id}/reviews    -> review::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(place::get_by_id).put(place::update).delete(place::delete),
        )
        .route(
            "/{place_id}/reviews",
            get(review::list_by_place).post(review::create),
        )
}
