pub mod amenity;
pub mod city;
pub mod health;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                                   service + storage health
/// /stats                                    record count per entity kind
///
/// /states                                   list, create
/// /states/{id}                              get, update, delete
/// /states/{state_id}/cities                 list, create
///
/// /cities/{id}                              get, update, delete
/// /cities/{city_id}/places                  list, create
///
/// /places/{id}                              get, update, delete
/// /places/{place_id}/reviews                list, create
///
/// /reviews/{id}                             get, update, delete
///
/// /amenities                                list, create
/// /amenities/{id}                           get, update, delete
///
/// /users                                    list, create
/// /users/{id}                               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/stats", get(handlers::stats::get_stats))
        // States, with their cities nested underneath.
        .nest("/states", state::router())
        // Cities, with their places nested underneath.
        .nest("/cities", city::router())
        // Places, with their reviews nested underneath.
        .nest("/places", place::router())
        .nest("/reviews", review::router())
        .nest("/amenities", amenity::router())
        .nest("/users", user::router())
}
