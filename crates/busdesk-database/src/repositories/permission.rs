//! Module permission repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use busdesk_core::error::{AppError, ErrorKind};
use busdesk_core::result::AppResult;
use busdesk_entity::permission::{Capabilities, CapabilityField};
use busdesk_entity::{AppModule, ModulePermission, Role};

use crate::store::PermissionStore;

/// Repository for the `module_permissions` table.
///
/// Row ordering follows the closed enum declaration order via the
/// Postgres enum types, so `ORDER BY role, module` matches the matrix
/// display order.
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    /// Create a new permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a row for a (role, module) pair if it does not exist yet.
    ///
    /// Used by the out-of-band seed path only; the application itself
    /// never creates permission rows. Returns `true` if a row was
    /// inserted.
    pub async fn seed_row(
        &self,
        role: Role,
        module: AppModule,
        caps: Capabilities,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO module_permissions (role, module, can_view, can_create, can_edit, can_delete) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (role, module) DO NOTHING",
        )
        .bind(role)
        .bind(module)
        .bind(caps.can_view)
        .bind(caps.can_create)
        .bind(caps.can_edit)
        .bind(caps.can_delete)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to seed permission row", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PermissionStore for PermissionRepository {
    async fn find_by_role(&self, role: Role) -> AppResult<Vec<ModulePermission>> {
        sqlx::query_as::<_, ModulePermission>(
            "SELECT * FROM module_permissions WHERE role = $1 ORDER BY module",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find permissions for role", e)
        })
    }

    async fn find_all(&self) -> AppResult<Vec<ModulePermission>> {
        sqlx::query_as::<_, ModulePermission>(
            "SELECT * FROM module_permissions ORDER BY role, module",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load permission matrix", e)
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<ModulePermission>> {
        sqlx::query_as::<_, ModulePermission>("SELECT * FROM module_permissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find permission row", e)
            })
    }

    async fn update_flag(
        &self,
        id: i64,
        field: CapabilityField,
        value: bool,
    ) -> AppResult<ModulePermission> {
        // The column name comes from a closed enum, never from user input.
        let query = format!(
            "UPDATE module_permissions SET {} = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
            field.column_name()
        );

        sqlx::query_as::<_, ModulePermission>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update permission flag", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Permission row {id} not found")))
    }
}
