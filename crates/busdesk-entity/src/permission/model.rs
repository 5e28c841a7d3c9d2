//! Module permission row entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::module::AppModule;
use crate::role::Role;

use super::capabilities::Capabilities;

/// A persisted permission matrix row keyed by (role, module).
///
/// Uniqueness of (role, module) is enforced by the storage schema.
/// Rows are provisioned out-of-band (seed data or CLI); the application
/// only reads and updates existing rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ModulePermission {
    /// Opaque numeric identifier used for targeted updates.
    pub id: i64,
    /// The role this row applies to.
    pub role: Role,
    /// The business module this row scopes.
    pub module: AppModule,
    /// May view the module's screens and data.
    pub can_view: bool,
    /// May create new records.
    pub can_create: bool,
    /// May edit existing records.
    pub can_edit: bool,
    /// May delete records.
    pub can_delete: bool,
    /// When this row was created.
    pub created_at: DateTime<Utc>,
    /// When this row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ModulePermission {
    /// Return the capability tuple of this row.
    ///
    /// Administrator rows always resolve to [`Capabilities::FULL`]
    /// regardless of stored values; the stored flags are not consulted.
    pub fn capabilities(&self) -> Capabilities {
        if self.role.is_admin() {
            return Capabilities::FULL;
        }
        Capabilities {
            can_view: self.can_view,
            can_create: self.can_create,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }

    /// Return the stored flags without the administrator override.
    /// Used only by the storage layer itself.
    pub fn stored_capabilities(&self) -> Capabilities {
        Capabilities {
            can_view: self.can_view,
            can_create: self.can_create,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::CapabilityField;

    fn row(role: Role) -> ModulePermission {
        ModulePermission {
            id: 1,
            role,
            module: AppModule::Ticketing,
            can_view: true,
            can_create: false,
            can_edit: false,
            can_delete: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_row_always_full() {
        let caps = row(Role::Admin).capabilities();
        assert_eq!(caps, Capabilities::FULL);
    }

    #[test]
    fn test_non_admin_row_reflects_stored_flags() {
        let caps = row(Role::PosOperator).capabilities();
        assert!(caps.get(CapabilityField::View));
        assert!(!caps.get(CapabilityField::Create));
    }
}
