//! Route definitions for the `/states` resource.
//!
//! Also nests the state-scoped city collection under `/states/{state_id}/cities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{city, state};
use crate::state::AppState;

/// Routes mounted at `/states`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
///
/// GET    /{state_id}/cities     -> city::list_by_state
/// POST   /{state_id}/cities     -> city::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(state::list).post(state::create))
        .route(
            "/{id}",
            get(state::get_by_id)
                .put(state::update)
                .delete(state::delete),
        )
        .route(
            "/{state_id}/cities",
            get(city::list_by_state).post(city::create),
        )
}
