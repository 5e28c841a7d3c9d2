//! Response DTOs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use busdesk_entity::permission::Capabilities;
use busdesk_entity::{AppModule, ModulePermission, Role};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Storage backend status.
    pub database: String,
    /// Cache backend status.
    pub cache: String,
}

/// The caller's allowed navigation entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    /// The caller's role.
    pub role: Role,
    /// Route prefixes the role may open. Entries the role cannot open
    /// are absent, not disabled.
    pub routes: Vec<String>,
}

/// The caller's full module → capability map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyPermissionsResponse {
    /// The caller's role.
    pub role: Role,
    /// Capability tuple per module, covering every module.
    pub permissions: HashMap<AppModule, Capabilities>,
}

/// One row of the admin permission matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRowResponse {
    /// Row identifier used for updates.
    pub id: i64,
    /// The role this row applies to.
    pub role: Role,
    /// The business module this row scopes.
    pub module: AppModule,
    /// Effective flags. Administrator rows report all-true so the UI
    /// renders them checked-and-disabled.
    #[serde(flatten)]
    pub capabilities: Capabilities,
    /// Whether the row may be edited (false for administrator rows).
    pub editable: bool,
    /// When this row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<ModulePermission> for PermissionRowResponse {
    fn from(row: ModulePermission) -> Self {
        Self {
            id: row.id,
            role: row.role,
            module: row.module,
            capabilities: row.capabilities(),
            editable: !row.role.is_admin(),
            updated_at: row.updated_at,
        }
    }
}
