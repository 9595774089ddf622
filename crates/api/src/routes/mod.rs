pub mod bookings;
pub mod health;
pub mod materials;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /materials                          list, create
/// /materials/{id}                     get, update, delete
///
/// /requests                           list, create
///
/// /bookings                           list, create
/// /bookings/material/{material_id}    bookings referencing a material
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/materials", materials::router())
        .nest("/requests", requests::router())
        .nest("/bookings", bookings::router())
}
