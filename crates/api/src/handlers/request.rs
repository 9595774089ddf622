//! Handlers for the `/requests` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use remat_db::models::request::{CreateMaterialRequest, MaterialRequest};
use remat_db::repositories::RequestRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/requests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterialRequest>,
) -> AppResult<(StatusCode, Json<MaterialRequest>)> {
    let request = RequestRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/requests
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MaterialRequest>>> {
    let requests = RequestRepo::list(&state.pool).await?;
    Ok(Json(requests))
}
