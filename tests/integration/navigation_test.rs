//! Navigation endpoint tests.

use axum::http::StatusCode;

use busdesk_entity::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_navigation_requires_authentication() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/navigation", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_pos_operator_navigation_omits_finance_screens() {
    let app = TestApp::new();
    let token = app.token_for(Role::PosOperator);

    let response = app
        .request("GET", "/api/navigation", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let routes: Vec<String> = response.body["data"]["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();

    assert!(routes.contains(&"/tickets".to_string()));
    assert!(routes.contains(&"/counters".to_string()));
    // Absent, not disabled.
    assert!(!routes.contains(&"/payroll".to_string()));
    assert!(!routes.contains(&"/accounting".to_string()));
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/navigation", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
