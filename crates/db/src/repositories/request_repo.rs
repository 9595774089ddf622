//! Repository for the `requests` table.
//!
//! The API contract is append-only, so there are no update or delete
//! operations here.

use sqlx::PgPool;

use crate::models::request::{CreateMaterialRequest, MaterialRequest};

const COLUMNS: &str =
    "id, material_type, quantity, location, deadline, description, created_at, updated_at";

/// Provides create/list operations for material requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaterialRequest,
    ) -> Result<MaterialRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (material_type, quantity, location, deadline, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialRequest>(&query)
            .bind(&input.material_type)
            .bind(&input.quantity)
            .bind(&input.location)
            .bind(input.deadline)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all requests, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MaterialRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests ORDER BY created_at DESC");
        sqlx::query_as::<_, MaterialRequest>(&query)
            .fetch_all(pool)
            .await
    }
}
