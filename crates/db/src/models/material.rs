//! Material entity model and DTOs.

use remat_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Physical condition of a listed material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "material_condition", rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    Good,
    Repairable,
}

/// A material row from the `materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub images: Vec<String>,
    pub quality_score: f64,
    pub distance_km: f64,
    pub carbon_saved_kg: f64,
    pub condition: Condition,
    pub verified: bool,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub unit: Option<String>,
    pub pickup_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new material listing.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    pub title: String,
    pub category: String,
    /// Ordered image URLs. Defaults to an empty list.
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub quality_score: f64,
    pub distance_km: f64,
    pub carbon_saved_kg: f64,
    pub condition: Condition,
    /// Defaults to `false` if omitted.
    pub verified: Option<bool>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub unit: Option<String>,
    pub pickup_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// DTO for updating an existing material. All fields are optional;
/// absent fields keep their stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterial {
    pub title: Option<String>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub quality_score: Option<f64>,
    pub distance_km: Option<f64>,
    pub carbon_saved_kg: Option<f64>,
    pub condition: Option<Condition>,
    pub verified: Option<bool>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub unit: Option<String>,
    pub pickup_address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}
