//! Navigation handler — which screens may the caller open.

use axum::Json;

use busdesk_auth::rbac::allowed_routes;

use crate::dto::response::{ApiResponse, NavigationResponse};
use crate::extractors::AuthUser;

/// GET /api/navigation
///
/// Returns the route prefixes the caller's role may open. The client
/// renders only these entries; screens the role cannot open never
/// appear in its navigation.
pub async fn navigation(auth: AuthUser) -> Json<ApiResponse<NavigationResponse>> {
    let routes = allowed_routes(auth.role)
        .iter()
        .map(|r| r.to_string())
        .collect();

    Json(ApiResponse::ok(NavigationResponse {
        role: auth.role,
        routes,
    }))
}
