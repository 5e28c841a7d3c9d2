//! Admin/write side of the module permission matrix.

use std::sync::Arc;

use tracing::{info, warn};

use busdesk_auth::rbac::PermissionChecker;
use busdesk_core::error::AppError;
use busdesk_database::store::PermissionStore;
use busdesk_entity::ModulePermission;
use busdesk_entity::permission::CapabilityField;

use crate::context::RequestContext;

/// Lets an administrator view the full (role × module) matrix and
/// toggle individual capability cells.
///
/// Mutations target one flag at a time; there is no bulk update and no
/// optimistic-concurrency token (last write wins). Storage failures
/// are surfaced to the administrator, never swallowed.
#[derive(Debug, Clone)]
pub struct PermissionAdminService {
    /// Permission row storage.
    store: Arc<dyn PermissionStore>,
    /// Read-side checker, invalidated after every write.
    checker: Arc<PermissionChecker>,
}

impl PermissionAdminService {
    /// Creates a new admin service.
    pub fn new(store: Arc<dyn PermissionStore>, checker: Arc<PermissionChecker>) -> Self {
        Self { store, checker }
    }

    /// Returns every matrix row, ordered by role then module.
    pub async fn matrix(&self, _ctx: &RequestContext) -> Result<Vec<ModulePermission>, AppError> {
        self.store.find_all().await
    }

    /// Toggles one capability flag on a matrix row.
    ///
    /// Rows belonging to the administrator role are refused before any
    /// write is attempted; the administrator role must remain
    /// always-fully-capable.
    pub async fn update_flag(
        &self,
        ctx: &RequestContext,
        id: i64,
        field: CapabilityField,
        value: bool,
    ) -> Result<ModulePermission, AppError> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Permission row {id} not found")))?;

        if record.role.is_admin() {
            return Err(AppError::authorization(
                "Permissions for the administrator role cannot be modified",
            ));
        }

        let updated = self.store.update_flag(id, field, value).await?;

        // Other sessions converge within the cache staleness window; the
        // next read on this role refetches immediately.
        if let Err(e) = self.checker.invalidate(updated.role).await {
            warn!(role = %updated.role, error = %e, "Permission cache invalidation failed");
        }

        info!(
            admin_id = %ctx.user_id,
            row_id = id,
            role = %updated.role,
            module = %updated.module,
            %field,
            value,
            "Permission flag updated"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busdesk_cache::memory::MemoryCacheProvider;
    use busdesk_cache::provider::CacheManager;
    use busdesk_core::ErrorKind;
    use busdesk_core::config::cache::MemoryCacheConfig;
    use busdesk_database::store::MemoryPermissionStore;
    use busdesk_entity::permission::Capabilities;
    use busdesk_entity::{AppModule, Role};
    use uuid::Uuid;

    fn admin_ctx() -> RequestContext {
        RequestContext::new(Uuid::new_v4(), Role::Admin, "Root".to_string())
    }

    fn make_service(store: Arc<MemoryPermissionStore>) -> PermissionAdminService {
        let provider = MemoryCacheProvider::new(
            &MemoryCacheConfig {
                max_capacity: 1000,
                time_to_live_seconds: 300,
            },
            300,
        );
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        let checker = Arc::new(PermissionChecker::new(store.clone(), cache, 300));
        PermissionAdminService::new(store, checker)
    }

    #[tokio::test]
    async fn test_unknown_row_is_not_found() {
        let service = make_service(Arc::new(MemoryPermissionStore::new()));
        let err = service
            .update_flag(&admin_ctx(), 999, CapabilityField::View, true)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_admin_row_is_refused_before_write() {
        let store = Arc::new(MemoryPermissionStore::new());
        let id = store
            .insert(Role::Admin, AppModule::Ticketing, Capabilities::FULL)
            .unwrap();
        let service = make_service(store.clone());

        let err = service
            .update_flag(&admin_ctx(), id, CapabilityField::View, false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        // The stored row is untouched.
        let row = store.find_by_id(id).await.unwrap().unwrap();
        assert!(row.can_view);
    }

    #[tokio::test]
    async fn test_update_targets_exactly_one_flag() {
        let store = Arc::new(MemoryPermissionStore::new());
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
        let service = make_service(store);

        let updated = service
            .update_flag(&admin_ctx(), id, CapabilityField::Create, true)
            .await
            .unwrap();

        assert!(updated.can_view);
        assert!(updated.can_create);
        assert!(!updated.can_edit);
        assert!(!updated.can_delete);
    }

    #[tokio::test]
    async fn test_matrix_reflects_update() {
        let store = Arc::new(MemoryPermissionStore::new());
        store.seed_defaults();
        let service = make_service(store);
        let ctx = admin_ctx();

        let matrix = service.matrix(&ctx).await.unwrap();
        let target = matrix
            .iter()
            .find(|r| !r.role.is_admin())
            .cloned()
            .unwrap();

        service
            .update_flag(&ctx, target.id, CapabilityField::Edit, true)
            .await
            .unwrap();

        let refreshed = service.matrix(&ctx).await.unwrap();
        let after = refreshed.iter().find(|r| r.id == target.id).unwrap();
        assert!(after.can_edit);
        assert!(!after.can_delete);
    }
}
