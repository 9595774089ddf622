//! HTTP-level integration tests for the `/api/materials` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

/// Minimal valid material payload.
fn oak_planks() -> serde_json::Value {
    serde_json::json!({
        "title": "Reclaimed Oak Planks",
        "category": "Lumber",
        "qualityScore": 0.92,
        "distanceKm": 3.2,
        "carbonSavedKg": 45,
        "condition": "excellent"
    })
}

// ---------------------------------------------------------------------------
// Material CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_material_returns_201_with_submitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/materials", oak_planks()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    assert!(json["id"].is_number());
    assert_eq!(json["title"], "Reclaimed Oak Planks");
    assert_eq!(json["category"], "Lumber");
    assert_eq!(json["qualityScore"], 0.92);
    assert_eq!(json["distanceKm"], 3.2);
    assert_eq!(json["carbonSavedKg"], 45.0);
    assert_eq!(json["condition"], "excellent");
    // Server-side defaults.
    assert_eq!(json["verified"], false);
    assert_eq!(json["images"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_get_returns_same_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/materials", oak_planks()).await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/materials/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Reclaimed Oak Planks");
    assert_eq!(json["category"], "Lumber");
    assert_eq!(json["qualityScore"], 0.92);
    assert_eq!(json["distanceKm"], 3.2);
    assert_eq!(json["carbonSavedKg"], 45.0);
    assert_eq!(json["condition"], "excellent");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_material_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/materials/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_materials_returns_all(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/materials", oak_planks()).await;

    let mut bricks = oak_planks();
    bricks["title"] = "Salvaged Bricks".into();
    bricks["category"] = "Masonry".into();
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/materials", bricks).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/materials").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Partial update semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_applies_partial_merge(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/materials", oak_planks()).await).await;
    let id = created["id"].as_i64().unwrap();

    // Only change the condition; everything else must survive.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/materials/{id}"),
        serde_json::json!({"condition": "repairable"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["condition"], "repairable");
    assert_eq!(json["title"], "Reclaimed Oak Planks");
    assert_eq!(json["qualityScore"], 0.92);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_material_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/materials/999999",
        serde_json::json!({"title": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_invalid_condition(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/materials", oak_planks()).await).await;
    let id = created["id"].as_i64().unwrap();

    // "pristine" is not a member of the condition enum; deserialization fails.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/materials/{id}"),
        serde_json::json!({"condition": "pristine"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The stored condition is unchanged.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/materials/{id}")).await).await;
    assert_eq!(json["condition"], "excellent");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_missing_required_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    // No title.
    let response = post_json(
        app,
        "/api/materials",
        serde_json::json!({
            "category": "Lumber",
            "qualityScore": 0.5,
            "distanceKm": 1.0,
            "carbonSavedKg": 10,
            "condition": "good"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_out_of_range_quality_score_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = oak_planks();
    payload["qualityScore"] = serde_json::json!(1.5);

    let response = post_json(app, "/api/materials", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_fields_are_dropped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = oak_planks();
    payload["aiVerificationScore"] = serde_json::json!(0.99);

    let response = post_json(app, "/api/materials", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json.get("aiVerificationScore").is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_material_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/materials", oak_planks()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/materials/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404 -- the delete is irreversible.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/materials/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_material_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/materials/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
