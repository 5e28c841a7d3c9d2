//! Module permission handlers: self-view, admin matrix, flag updates.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::UpdatePermissionRequest;
use crate::dto::response::{ApiResponse, MyPermissionsResponse, PermissionRowResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::require_admin;
use crate::state::AppState;

/// GET /api/permissions/me
///
/// Full module → capability map for the caller's role. Total: every
/// module is present, absent rows resolve to all-false, admin resolves
/// to all-true.
pub async fn my_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<MyPermissionsResponse>> {
    let permissions = state.checker.role_permissions(auth.role).await;

    Json(ApiResponse::ok(MyPermissionsResponse {
        role: auth.role,
        permissions,
    }))
}

/// GET /api/permissions/matrix — admin only.
pub async fn matrix(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PermissionRowResponse>>>, ApiError> {
    require_admin(&auth)?;

    let rows = state.permission_service.matrix(auth.context()).await?;
    let rows = rows.into_iter().map(PermissionRowResponse::from).collect();

    Ok(Json(ApiResponse::ok(rows)))
}

/// PUT /api/permissions/{id} — admin only.
///
/// Toggles one capability flag. Rows of the administrator role are
/// refused with 403 before any write.
pub async fn update_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePermissionRequest>,
) -> Result<Json<ApiResponse<PermissionRowResponse>>, ApiError> {
    require_admin(&auth)?;

    let updated = state
        .permission_service
        .update_flag(auth.context(), id, req.field, req.value)
        .await?;

    Ok(Json(ApiResponse::ok(PermissionRowResponse::from(updated))))
}
