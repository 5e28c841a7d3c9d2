//! Cached module permission checker — the read side of the matrix.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use busdesk_cache::keys;
use busdesk_cache::provider::CacheManager;
use busdesk_core::result::AppResult;
use busdesk_core::traits::cache::CacheProvider;
use busdesk_database::store::PermissionStore;
use busdesk_entity::permission::Capabilities;
use busdesk_entity::{AppModule, Role};

/// Resolves per-module capabilities for a role, with a per-role cache.
///
/// The checker is total: every lookup yields a [`Capabilities`] tuple and
/// never an error. The admin role resolves to [`Capabilities::FULL`]
/// without touching storage or cache; an absent (role, module) record and
/// any storage failure both resolve to [`Capabilities::NONE`].
///
/// A role's full capability map is cached for a bounded staleness window.
/// Mutation paths call [`PermissionChecker::invalidate`] so other sessions
/// converge within that window.
#[derive(Debug, Clone)]
pub struct PermissionChecker {
    /// Permission row storage.
    store: Arc<dyn PermissionStore>,
    /// Per-role capability map cache.
    cache: Arc<CacheManager>,
    /// Staleness window for cached maps.
    ttl: Duration,
}

impl PermissionChecker {
    /// Creates a checker over the given store and cache.
    pub fn new(
        store: Arc<dyn PermissionStore>,
        cache: Arc<CacheManager>,
        staleness_window_seconds: u64,
    ) -> Self {
        Self {
            store,
            cache,
            ttl: Duration::from_secs(staleness_window_seconds),
        }
    }

    /// Returns the full module → capability map for a role.
    ///
    /// Admin gets every module fully granted. Modules without a stored
    /// row are present with [`Capabilities::NONE`], so callers can
    /// iterate the whole module universe.
    pub async fn role_permissions(&self, role: Role) -> HashMap<AppModule, Capabilities> {
        if role.is_admin() {
            return AppModule::ALL
                .iter()
                .map(|m| (*m, Capabilities::FULL))
                .collect();
        }

        let stored = self.load_stored(role).await;
        AppModule::ALL
            .iter()
            .map(|m| (*m, stored.get(m).copied().unwrap_or(Capabilities::NONE)))
            .collect()
    }

    /// Returns the capability tuple for a (role, module) pair.
    pub async fn get_permission(&self, role: Role, module: AppModule) -> Capabilities {
        if role.is_admin() {
            return Capabilities::FULL;
        }

        self.load_stored(role)
            .await
            .get(&module)
            .copied()
            .unwrap_or(Capabilities::NONE)
    }

    /// Whether the role may view the module.
    pub async fn can_view(&self, role: Role, module: AppModule) -> bool {
        self.get_permission(role, module).await.can_view
    }

    /// Whether the role may create records in the module.
    pub async fn can_create(&self, role: Role, module: AppModule) -> bool {
        self.get_permission(role, module).await.can_create
    }

    /// Whether the role may edit records in the module.
    pub async fn can_edit(&self, role: Role, module: AppModule) -> bool {
        self.get_permission(role, module).await.can_edit
    }

    /// Whether the role may delete records in the module.
    pub async fn can_delete(&self, role: Role, module: AppModule) -> bool {
        self.get_permission(role, module).await.can_delete
    }

    /// Drops the cached capability map for a role.
    ///
    /// Called by the admin write path after a successful update so the
    /// next read refetches from storage.
    pub async fn invalidate(&self, role: Role) -> AppResult<()> {
        self.cache.delete(&keys::role_permissions(role)).await
    }

    /// Loads the stored capability map for a non-admin role, consulting
    /// the cache first. Fails closed: any storage error resolves to an
    /// empty map.
    async fn load_stored(&self, role: Role) -> HashMap<AppModule, Capabilities> {
        let key = keys::role_permissions(role);

        match self
            .cache
            .get_json::<HashMap<AppModule, Capabilities>>(&key)
            .await
        {
            Ok(Some(map)) => return map,
            Ok(None) => {}
            Err(e) => {
                warn!(%role, error = %e, "Permission cache read failed, falling back to storage");
            }
        }

        let rows = match self.store.find_by_role(role).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(%role, error = %e, "Permission fetch failed, treating role as unpermitted");
                return HashMap::new();
            }
        };

        // UNIQUE (role, module) makes duplicates impossible; if the
        // constraint is ever bypassed, the first row wins.
        let mut map = HashMap::new();
        for row in rows {
            map.entry(row.module).or_insert_with(|| row.capabilities());
        }

        if let Err(e) = self.cache.set_json(&key, &map, self.ttl).await {
            warn!(%role, error = %e, "Permission cache write failed");
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busdesk_cache::memory::MemoryCacheProvider;
    use busdesk_core::config::cache::MemoryCacheConfig;
    use busdesk_database::store::MemoryPermissionStore;
    use busdesk_entity::permission::CapabilityField;

    fn make_cache() -> Arc<CacheManager> {
        let provider = MemoryCacheProvider::new(
            &MemoryCacheConfig {
                max_capacity: 1000,
                time_to_live_seconds: 300,
            },
            300,
        );
        Arc::new(CacheManager::from_provider(Arc::new(provider)))
    }

    fn make_checker(store: Arc<MemoryPermissionStore>) -> PermissionChecker {
        PermissionChecker::new(store, make_cache(), 300)
    }

    #[tokio::test]
    async fn test_admin_is_always_fully_permitted() {
        // Empty store on purpose: admin must not touch it.
        let checker = make_checker(Arc::new(MemoryPermissionStore::new()));
        for module in AppModule::ALL {
            assert_eq!(
                checker.get_permission(Role::Admin, module).await,
                Capabilities::FULL
            );
        }
    }

    #[tokio::test]
    async fn test_absent_record_yields_none() {
        let checker = make_checker(Arc::new(MemoryPermissionStore::new()));
        let caps = checker
            .get_permission(Role::PosOperator, AppModule::Payroll)
            .await;
        assert_eq!(caps, Capabilities::NONE);
    }

    #[tokio::test]
    async fn test_stored_flags_are_resolved() {
        let store = Arc::new(MemoryPermissionStore::new());
        store
            .insert(
                Role::PosOperator,
                AppModule::Ticketing,
                Capabilities {
                    can_view: true,
                    can_create: true,
                    can_edit: false,
                    can_delete: false,
                },
            )
            .unwrap();

        let checker = make_checker(store);
        assert!(checker.can_view(Role::PosOperator, AppModule::Ticketing).await);
        assert!(checker.can_create(Role::PosOperator, AppModule::Ticketing).await);
        assert!(!checker.can_edit(Role::PosOperator, AppModule::Ticketing).await);
        assert!(!checker.can_delete(Role::PosOperator, AppModule::Ticketing).await);
    }

    #[tokio::test]
    async fn test_cached_view_is_stale_until_invalidated() {
        let store = Arc::new(MemoryPermissionStore::new());
        let id = store
            .insert(Role::FinanceOperator, AppModule::Expenses, Capabilities::NONE)
            .unwrap();

        let checker = make_checker(store.clone());

        // Warm the cache.
        assert!(!checker.can_view(Role::FinanceOperator, AppModule::Expenses).await);

        // Update behind the cache's back: still stale.
        store
            .update_flag(id, CapabilityField::View, true)
            .await
            .unwrap();
        assert!(!checker.can_view(Role::FinanceOperator, AppModule::Expenses).await);

        // After invalidation the next read sees the new value.
        checker.invalidate(Role::FinanceOperator).await.unwrap();
        assert!(checker.can_view(Role::FinanceOperator, AppModule::Expenses).await);
    }

    #[tokio::test]
    async fn test_role_permissions_covers_every_module() {
        let checker = make_checker(Arc::new(MemoryPermissionStore::new()));
        let map = checker.role_permissions(Role::TechnicalOperator).await;
        assert_eq!(map.len(), AppModule::ALL.len());
        assert!(map.values().all(|c| *c == Capabilities::NONE));
    }
}
