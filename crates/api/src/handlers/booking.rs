//! Handlers for the `/bookings` resource.
//!
//! Booking creation performs no referential check against the
//! materials table: a booking against an unknown material succeeds.
//! This mirrors the decoupled lifecycle of the two entities.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use remat_core::types::DbId;
use remat_db::models::booking::{Booking, CreateBooking};
use remat_db::repositories::BookingRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = BookingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/material/{material_id}
///
/// Returns an empty list, not an error, when nothing matches.
pub async fn list_by_material(
    State(state): State<AppState>,
    Path(material_id): Path<DbId>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list_by_material(&state.pool, material_id).await?;
    Ok(Json(bookings))
}
