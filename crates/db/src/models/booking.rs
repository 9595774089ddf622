//! Booking entity model and DTO.

use remat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A latitude/longitude pair, stored as a JSONB column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Lifecycle state of a booking.
///
/// The set is closed but no transition function is enforced; see
/// DESIGN.md for the open question around status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

/// A booking row from the `bookings` table.
///
/// `material_id` is a plain reference: the material it points at may
/// have been deleted after the booking was created.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub material_id: DbId,
    pub buyer_location: Json<GeoPoint>,
    pub seller_location: Option<Json<GeoPoint>>,
    /// Snapshot of the material title at booking time.
    pub material_title: String,
    pub status: BookingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub material_id: DbId,
    pub buyer_location: GeoPoint,
    pub seller_location: Option<GeoPoint>,
    pub material_title: String,
    /// Defaults to `pending` if omitted.
    pub status: Option<BookingStatus>,
}
