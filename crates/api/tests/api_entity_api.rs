//! HTTP-level integration tests for the project-scoped `/apis` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw, put_json};
use sqlx::PgPool;

async fn api_count(pool: &PgPool) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM apis")
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

fn orders_api() -> serde_json::Value {
    serde_json::json!({
        "name": "List orders",
        "path": "/orders",
        "method": "GET",
        "table_name": "orders",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_api_under_project(pool: PgPool) {
    let project_id = common::create_project(&pool, "Shop").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &format!("/baas/projects/{project_id}/apis"), orders_api()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "API created successfully");

    let api = &json["api"];
    assert_eq!(api["project_id"], project_id.as_str());
    assert_eq!(api["name"], "List orders");
    assert_eq!(api["path"], "/orders");
    assert_eq!(api["method"], "GET");
    assert_eq!(api["table_name"], "orders");
    assert_eq!(api["status"], "active");
    assert_eq!(api["id"].as_str().unwrap().len(), 8);

    assert_eq!(api_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_api_under_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/baas/projects/missing1/apis", orders_api()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(api_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_project_wins_over_malformed_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/baas/projects/missing1/apis", "{not json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_api_missing_field_returns_400(pool: PgPool) {
    let project_id = common::create_project(&pool, "Shop").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/baas/projects/{project_id}/apis"),
        serde_json::json!({"name": "List orders", "path": "/orders", "method": "GET"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(api_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_api_empty_field_returns_400(pool: PgPool) {
    let project_id = common::create_project(&pool, "Shop").await;

    let app = common::build_test_app(pool.clone());
    let mut body = orders_api();
    body["method"] = serde_json::json!("");
    let response = post_json(app, &format!("/baas/projects/{project_id}/apis"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "method: method must not be empty");
    assert_eq!(api_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_get_update_delete_api(pool: PgPool) {
    let project_id = common::create_project(&pool, "Shop").await;
    let api_id = common::create_api(&pool, &project_id, "/orders").await;
    let base = format!("/baas/projects/{project_id}/apis");

    // List
    let json = body_json(get(common::build_test_app(pool.clone()), &base).await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["apis"][0]["id"], api_id.as_str());

    // Get
    let response = get(common::build_test_app(pool.clone()), &format!("{base}/{api_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["api"]["path"], "/orders");

    // Update: only method changes
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("{base}/{api_id}"),
        serde_json::json!({"method": "POST", "path": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "API updated successfully");
    assert_eq!(json["api"]["method"], "POST");
    assert_eq!(json["api"]["path"], "/orders");

    // Delete
    let response = delete(common::build_test_app(pool.clone()), &format!("{base}/{api_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(api_count(&pool).await, 0);

    // Gone
    let response = get(common::build_test_app(pool.clone()), &format!("{base}/{api_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "API not found");

    // The project itself survives.
    let response = get(
        common::build_test_app(pool),
        &format!("/baas/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_api_is_not_visible_through_another_project(pool: PgPool) {
    let owner = common::create_project(&pool, "Owner").await;
    let stranger = common::create_project(&pool, "Stranger").await;
    let api_id = common::create_api(&pool, &owner, "/orders").await;

    let uri = format!("/baas/projects/{stranger}/apis/{api_id}");
    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(api_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_apis_of_missing_project_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/baas/projects/missing1/apis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_api_id_with_nul_byte_returns_404(pool: PgPool) {
    let project_id = common::create_project(&pool, "Shop").await;
    let uri = format!("/baas/projects/{project_id}/apis/ab%00cd");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "API not found");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
