//! Route definitions for the `/requests` resource.
//!
//! Requests are append-only: submitted once, then read as a list.

use axum::routing::get;
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /    -> list
/// POST   /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(request::list).post(request::create))
}
