//! Route definitions for the `/cities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{city, place};
use crate::state::AppState;

/// Routes mounted at `/cities`.
///
/// ```text
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /{city_id}/places      -> place::list_by_city
/// POST   /{city_id}/places      -> place::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(city::get_by_id).put(city::update).delete(city::delete),
        )
        .route(
            "/{city_id}/places",
            get(place::list_by_city).post(place::create),
        )
}
