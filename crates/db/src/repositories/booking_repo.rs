//! Repository for the `bookings` table.

use remat_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking};

const COLUMNS: &str = "id, material_id, buyer_location, seller_location, material_title, \
     status, created_at, updated_at";

/// Provides create/list operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `pending`. The
    /// referenced material is not checked for existence.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (material_id, buyer_location, seller_location,
                 material_title, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'pending'::booking_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.material_id)
            .bind(Json(input.buyer_location))
            .bind(input.seller_location.map(Json))
            .bind(&input.material_title)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// List all bookings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// List all bookings referencing the given material ID.
    ///
    /// The material itself may no longer exist; the result is simply
    /// empty when nothing matches.
    pub async fn list_by_material(
        pool: &PgPool,
        material_id: DbId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE material_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(material_id)
            .fetch_all(pool)
            .await
    }
}
