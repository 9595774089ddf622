//! Repository for the `materials` table.

use remat_core::types::DbId;
use sqlx::PgPool;

use crate::models::material::{CreateMaterial, Material, UpdateMaterial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, images, quality_score, distance_km, carbon_saved_kg, \
     condition, verified, description, latitude, longitude, unit, pickup_address, city, \
     postal_code, created_at, updated_at";

/// Provides CRUD operations for material listings.
pub struct MaterialRepo;

impl MaterialRepo {
    /// Insert a new material, returning the created row.
    ///
    /// If `verified` is `None` in the input, defaults to `false`.
    pub async fn create(pool: &PgPool, input: &CreateMaterial) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO materials (title, category, images, quality_score, distance_km,
                 carbon_saved_kg, condition, verified, description, latitude, longitude,
                 unit, pickup_address, city, postal_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, FALSE), $9, $10, $11, $12,
                 $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.images)
            .bind(input.quality_score)
            .bind(input.distance_km)
            .bind(input.carbon_saved_kg)
            .bind(input.condition)
            .bind(input.verified)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.unit)
            .bind(&input.pickup_address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .fetch_one(pool)
            .await
    }

    /// Find a material by its store-assigned ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE id = $1");
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all materials, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials ORDER BY created_at DESC");
        sqlx::query_as::<_, Material>(&query).fetch_all(pool).await
    }

    /// Update a material. Only non-`None` fields in `input` are applied;
    /// required columns can therefore never be unset.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaterial,
    ) -> Result<Option<Material>, sqlx::Error> {
        let query = format!(
            "UPDATE materials SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                images = COALESCE($4, images),
                quality_score = COALESCE($5, quality_score),
                distance_km = COALESCE($6, distance_km),
                carbon_saved_kg = COALESCE($7, carbon_saved_kg),
                condition = COALESCE($8, condition),
                verified = COALESCE($9, verified),
                description = COALESCE($10, description),
                latitude = COALESCE($11, latitude),
                longitude = COALESCE($12, longitude),
                unit = COALESCE($13, unit),
                pickup_address = COALESCE($14, pickup_address),
                city = COALESCE($15, city),
                postal_code = COALESCE($16, postal_code),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.images)
            .bind(input.quality_score)
            .bind(input.distance_km)
            .bind(input.carbon_saved_kg)
            .bind(input.condition)
            .bind(input.verified)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.unit)
            .bind(&input.pickup_address)
            .bind(&input.city)
            .bind(&input.postal_code)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a material by ID. Returns `true` if a row was
    /// removed. Bookings referencing the material are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
