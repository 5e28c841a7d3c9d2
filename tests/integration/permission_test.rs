//! Module permission endpoint tests.

use axum::http::StatusCode;
use serde_json::{Value, json};

use busdesk_entity::Role;

use crate::helpers::TestApp;

/// Find the matrix row id for a (role, module) pair via the API.
async fn row_id(app: &TestApp, admin_token: &str, role: &str, module: &str) -> i64 {
    let response = app
        .request("GET", "/api/permissions/matrix", None, Some(admin_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["role"] == role && r["module"] == module)
        .map(|r| r["id"].as_i64().unwrap())
        .expect("matrix row not found")
}

#[tokio::test]
async fn test_me_covers_every_module_with_defaults() {
    let app = TestApp::new(); // no rows seeded at all
    let token = app.token_for(Role::PosOperator);

    let response = app
        .request("GET", "/api/permissions/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let permissions = response.body["data"]["permissions"].as_object().unwrap();
    assert_eq!(permissions.len(), 11);
    for caps in permissions.values() {
        assert_eq!(caps["can_view"], Value::Bool(false));
        assert_eq!(caps["can_delete"], Value::Bool(false));
    }
}

#[tokio::test]
async fn test_me_for_admin_is_all_true() {
    let app = TestApp::new();
    let token = app.token_for(Role::Admin);

    let response = app
        .request("GET", "/api/permissions/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let permissions = response.body["data"]["permissions"].as_object().unwrap();
    assert_eq!(permissions.len(), 11);
    for caps in permissions.values() {
        assert_eq!(caps["can_view"], Value::Bool(true));
        assert_eq!(caps["can_create"], Value::Bool(true));
        assert_eq!(caps["can_edit"], Value::Bool(true));
        assert_eq!(caps["can_delete"], Value::Bool(true));
    }
}

#[tokio::test]
async fn test_matrix_requires_admin() {
    let app = TestApp::seeded();
    let token = app.token_for(Role::OperationsManager);

    let response = app
        .request("GET", "/api/permissions/matrix", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_matrix_reports_admin_rows_full_and_locked() {
    let app = TestApp::seeded(); // seeded rows are stored all-false
    let token = app.token_for(Role::Admin);

    let response = app
        .request("GET", "/api/permissions/matrix", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 5 * 11);

    for row in rows.iter().filter(|r| r["role"] == "admin") {
        assert_eq!(row["can_view"], Value::Bool(true));
        assert_eq!(row["can_delete"], Value::Bool(true));
        assert_eq!(row["editable"], Value::Bool(false));
    }
}

#[tokio::test]
async fn test_update_flag_round_trips_through_matrix_and_me() {
    let app = TestApp::seeded();
    let admin_token = app.token_for(Role::Admin);
    let operator_token = app.token_for(Role::OperationsManager);

    // Warm the operator's permission cache with the all-false state.
    let before = app
        .request("GET", "/api/permissions/me", None, Some(&operator_token))
        .await;
    assert_eq!(
        before.body["data"]["permissions"]["ticketing"]["can_create"],
        Value::Bool(false)
    );

    let id = row_id(&app, &admin_token, "operations-manager", "ticketing").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/permissions/{id}"),
            Some(json!({"field": "can_create", "value": true})),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["can_create"], Value::Bool(true));
    // The other three flags are untouched.
    assert_eq!(response.body["data"]["can_view"], Value::Bool(false));
    assert_eq!(response.body["data"]["can_edit"], Value::Bool(false));
    assert_eq!(response.body["data"]["can_delete"], Value::Bool(false));

    // The write invalidated the role's cache, so the next read is fresh.
    let after = app
        .request("GET", "/api/permissions/me", None, Some(&operator_token))
        .await;
    assert_eq!(
        after.body["data"]["permissions"]["ticketing"]["can_create"],
        Value::Bool(true)
    );
}

#[tokio::test]
async fn test_update_admin_row_is_refused() {
    let app = TestApp::seeded();
    let admin_token = app.token_for(Role::Admin);

    let id = row_id(&app, &admin_token, "admin", "ticketing").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/permissions/{id}"),
            Some(json!({"field": "can_view", "value": false})),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    // Still reported fully granted.
    let matrix = app
        .request("GET", "/api/permissions/matrix", None, Some(&admin_token))
        .await;
    let row = matrix.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"].as_i64() == Some(id))
        .unwrap()
        .clone();
    assert_eq!(row["can_view"], Value::Bool(true));
}

#[tokio::test]
async fn test_update_requires_admin() {
    let app = TestApp::seeded();
    let admin_token = app.token_for(Role::Admin);
    let operator_token = app.token_for(Role::FinanceOperator);

    let id = row_id(&app, &admin_token, "finance-operator", "expenses").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/permissions/{id}"),
            Some(json!({"field": "can_view", "value": true})),
            Some(&operator_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_unknown_row_is_not_found() {
    let app = TestApp::seeded();
    let admin_token = app.token_for(Role::Admin);

    let response = app
        .request(
            "PUT",
            "/api/permissions/99999",
            Some(json!({"field": "can_view", "value": true})),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
