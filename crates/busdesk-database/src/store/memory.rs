//! In-memory permission store.
//!
//! Backs unit and integration tests, and the CLI's offline inspection
//! paths, without requiring a running PostgreSQL instance.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use busdesk_core::error::AppError;
use busdesk_core::result::AppResult;
use busdesk_entity::permission::{Capabilities, CapabilityField};
use busdesk_entity::{AppModule, ModulePermission, Role};

use super::PermissionStore;

/// Permission store holding rows in process memory.
#[derive(Debug, Default)]
pub struct MemoryPermissionStore {
    /// Rows keyed by id.
    rows: DashMap<i64, ModulePermission>,
    /// Next row id.
    next_id: AtomicI64,
}

impl MemoryPermissionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a row for a (role, module) pair and return its id.
    ///
    /// Rejects duplicates the same way the database UNIQUE constraint
    /// does, so test fixtures cannot drift from production semantics.
    pub fn insert(
        &self,
        role: Role,
        module: AppModule,
        caps: Capabilities,
    ) -> AppResult<i64> {
        let duplicate = self
            .rows
            .iter()
            .any(|r| r.role == role && r.module == module);
        if duplicate {
            return Err(AppError::conflict(format!(
                "Permission row for ({role}, {module}) already exists"
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.rows.insert(
            id,
            ModulePermission {
                id,
                role,
                module,
                can_view: caps.can_view,
                can_create: caps.can_create,
                can_edit: caps.can_edit,
                can_delete: caps.can_delete,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    /// Seed one row per (role, module) pair with all-false capabilities,
    /// skipping pairs that already exist.
    pub fn seed_defaults(&self) {
        for role in Role::ALL {
            for module in AppModule::ALL {
                let _ = self.insert(role, module, Capabilities::NONE);
            }
        }
    }

    fn sort_key(row: &ModulePermission) -> (usize, usize) {
        let role_idx = Role::ALL.iter().position(|r| *r == row.role).unwrap_or(0);
        let module_idx = AppModule::ALL
            .iter()
            .position(|m| *m == row.module)
            .unwrap_or(0);
        (role_idx, module_idx)
    }
}

#[async_trait]
impl PermissionStore for MemoryPermissionStore {
    async fn find_by_role(&self, role: Role) -> AppResult<Vec<ModulePermission>> {
        let mut rows: Vec<ModulePermission> = self
            .rows
            .iter()
            .filter(|r| r.role == role)
            .map(|r| r.clone())
            .collect();
        rows.sort_by_key(Self::sort_key);
        Ok(rows)
    }

    async fn find_all(&self) -> AppResult<Vec<ModulePermission>> {
        let mut rows: Vec<ModulePermission> =
            self.rows.iter().map(|r| r.clone()).collect();
        rows.sort_by_key(Self::sort_key);
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<ModulePermission>> {
        Ok(self.rows.get(&id).map(|r| r.clone()))
    }

    async fn update_flag(
        &self,
        id: i64,
        field: CapabilityField,
        value: bool,
    ) -> AppResult<ModulePermission> {
        let mut entry = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Permission row {id} not found")))?;

        let mut caps = entry.stored_capabilities();
        caps.set(field, value);
        entry.can_view = caps.can_view;
        entry.can_create = caps.can_create;
        entry.can_edit = caps.can_edit;
        entry.can_delete = caps.can_delete;
        entry.updated_at = Utc::now();

        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_pair_yields_no_row() {
        let store = MemoryPermissionStore::new();
        let rows = store.find_by_role(Role::PosOperator).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected() {
        let store = MemoryPermissionStore::new();
        store
            .insert(Role::PosOperator, AppModule::Ticketing, Capabilities::NONE)
            .unwrap();
        let dup = store.insert(Role::PosOperator, AppModule::Ticketing, Capabilities::NONE);
        assert!(dup.is_err());
    }

    #[tokio::test]
    async fn test_update_flag_targets_one_field() {
        let store = MemoryPermissionStore::new();
        let id = store
            .insert(
                Role::OperationsManager,
                AppModule::Ticketing,
                Capabilities {
                    can_view: true,
                    can_create: false,
                    can_edit: false,
                    can_delete: false,
                },
            )
            .unwrap();

        let updated = store
            .update_flag(id, CapabilityField::Create, true)
            .await
            .unwrap();

        assert!(updated.can_view);
        assert!(updated.can_create);
        assert!(!updated.can_edit);
        assert!(!updated.can_delete);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_role_then_module() {
        let store = MemoryPermissionStore::new();
        store
            .insert(Role::PosOperator, AppModule::Shipments, Capabilities::NONE)
            .unwrap();
        store
            .insert(Role::Admin, AppModule::Ticketing, Capabilities::NONE)
            .unwrap();
        store
            .insert(Role::PosOperator, AppModule::Ticketing, Capabilities::NONE)
            .unwrap();

        let rows = store.find_all().await.unwrap();
        assert_eq!(rows[0].role, Role::Admin);
        assert_eq!(rows[1].module, AppModule::Ticketing);
        assert_eq!(rows[2].module, AppModule::Shipments);
    }
}
