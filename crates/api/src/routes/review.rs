//! Route definitions for the `/reviews` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(review::get_by_id)
            .put(review::update)
            .delete(review::delete),
    )
}
