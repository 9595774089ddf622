//! Material request entity model and DTO.
//!
//! Requests are append-only in the API contract: created on submission,
//! listed afterwards, never updated or deleted.

use chrono::NaiveDate;
use remat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A demand-side request row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequest {
    pub id: DbId,
    pub material_type: String,
    /// Free text, e.g. "20 m2" or "about 50 bricks".
    pub quantity: String,
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a new material request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    pub material_type: String,
    pub quantity: String,
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub description: Option<String>,
}
