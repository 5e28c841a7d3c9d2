//! Permission store boundary.
//!
//! The RBAC subsystem talks to its persisted permission table through
//! [`PermissionStore`]: select rows matching a role, select all rows
//! ordered by role then module, and update one flag on a row by id.
//! Production uses the Postgres implementation in
//! [`crate::repositories::permission`]; tests use the in-memory
//! implementation in [`memory`].

pub mod memory;

use async_trait::async_trait;

use busdesk_core::result::AppResult;
use busdesk_entity::permission::CapabilityField;
use busdesk_entity::{ModulePermission, Role};

/// External-storage boundary for the module permission matrix.
#[async_trait]
pub trait PermissionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find all permission rows for a role, ordered by module.
    async fn find_by_role(&self, role: Role) -> AppResult<Vec<ModulePermission>>;

    /// Find all permission rows, ordered by role then module.
    async fn find_all(&self) -> AppResult<Vec<ModulePermission>>;

    /// Find a permission row by its numeric identifier.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ModulePermission>>;

    /// Update exactly one capability flag on a row and return the updated
    /// row. The other three flags are untouched.
    async fn update_flag(
        &self,
        id: i64,
        field: CapabilityField,
        value: bool,
    ) -> AppResult<ModulePermission>;
}

pub use memory::MemoryPermissionStore;
