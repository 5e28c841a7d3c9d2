//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use busdesk_auth::jwt::decoder::JwtDecoder;
use busdesk_auth::rbac::PermissionChecker;
use busdesk_cache::provider::CacheManager;
use busdesk_core::config::AppConfig;
use busdesk_database::store::PermissionStore;
use busdesk_service::permission::PermissionAdminService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Cache manager (Redis or in-memory).
    pub cache: Arc<CacheManager>,
    /// Permission row storage.
    pub store: Arc<dyn PermissionStore>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Read-side permission checker.
    pub checker: Arc<PermissionChecker>,
    /// Admin-side permission service.
    pub permission_service: Arc<PermissionAdminService>,
}
