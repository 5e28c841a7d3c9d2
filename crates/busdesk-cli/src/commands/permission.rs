//! Module permission CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use busdesk_auth::rbac::PermissionChecker;
use busdesk_cache::provider::CacheManager;
use busdesk_core::error::AppError;
use busdesk_database::repositories::permission::PermissionRepository;
use busdesk_database::store::PermissionStore;
use busdesk_entity::permission::CapabilityField;
use busdesk_entity::{AppModule, ModulePermission, Role};
use busdesk_service::context::RequestContext;
use busdesk_service::permission::PermissionAdminService;

use crate::output::{self, OutputFormat};

/// Arguments for permission commands
#[derive(Debug, Args)]
pub struct PermissionArgs {
    /// Permission subcommand
    #[command(subcommand)]
    pub command: PermissionCommand,
}

/// Permission subcommands
#[derive(Debug, Subcommand)]
pub enum PermissionCommand {
    /// List the full permission matrix
    List,
    /// Show the rows for one role
    Show {
        /// Role to show (e.g. pos-operator)
        #[arg(short, long)]
        role: Role,
    },
    /// Set one capability flag to true
    Grant {
        /// Target role
        #[arg(short, long)]
        role: Role,
        /// Target module
        #[arg(short, long)]
        module: AppModule,
        /// Capability flag (view, create, edit, delete)
        #[arg(short, long)]
        field: String,
    },
    /// Set one capability flag to false
    Revoke {
        /// Target role
        #[arg(short, long)]
        role: Role,
        /// Target module
        #[arg(short, long)]
        module: AppModule,
        /// Capability flag (view, create, edit, delete)
        #[arg(short, long)]
        field: String,
    },
}

/// Permission display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PermissionRow {
    /// Row ID
    id: i64,
    /// Role
    role: String,
    /// Module
    module: String,
    /// View flag
    view: bool,
    /// Create flag
    create: bool,
    /// Edit flag
    edit: bool,
    /// Delete flag
    delete: bool,
    /// Last updated
    updated_at: String,
}

impl From<&ModulePermission> for PermissionRow {
    fn from(row: &ModulePermission) -> Self {
        let caps = row.capabilities();
        Self {
            id: row.id,
            role: row.role.to_string(),
            module: row.module.to_string(),
            view: caps.can_view,
            create: caps.can_create,
            edit: caps.can_edit,
            delete: caps.can_delete,
            updated_at: row.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute permission commands
pub async fn execute(
    args: &PermissionArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let store: Arc<dyn PermissionStore> = Arc::new(PermissionRepository::new(pool));

    match &args.command {
        PermissionCommand::List => {
            let rows = store.find_all().await?;
            let rows: Vec<PermissionRow> = rows.iter().map(PermissionRow::from).collect();
            output::print_list(&rows, format);
        }
        PermissionCommand::Show { role } => {
            let rows = store.find_by_role(*role).await?;
            let rows: Vec<PermissionRow> = rows.iter().map(PermissionRow::from).collect();
            output::print_list(&rows, format);
        }
        PermissionCommand::Grant {
            role,
            module,
            field,
        } => {
            toggle_flag(&config, store, *role, *module, field, true).await?;
        }
        PermissionCommand::Revoke {
            role,
            module,
            field,
        } => {
            toggle_flag(&config, store, *role, *module, field, false).await?;
        }
    }

    Ok(())
}

/// Toggle one flag through the admin service, so the Admin-role guard
/// and cache invalidation apply exactly as they do over HTTP.
async fn toggle_flag(
    config: &busdesk_core::config::AppConfig,
    store: Arc<dyn PermissionStore>,
    role: Role,
    module: AppModule,
    field: &str,
    value: bool,
) -> Result<(), AppError> {
    let field: CapabilityField = field.parse()?;

    let row = store
        .find_by_role(role)
        .await?
        .into_iter()
        .find(|r| r.module == module)
        .ok_or_else(|| {
            AppError::not_found(format!("No permission row for ({role}, {module}); run seed"))
        })?;

    let cache = Arc::new(CacheManager::new(&config.cache).await?);
    let checker = Arc::new(PermissionChecker::new(
        Arc::clone(&store),
        cache,
        config.cache.default_ttl_seconds,
    ));
    let service = PermissionAdminService::new(store, checker);

    let ctx = RequestContext::new(Uuid::nil(), Role::Admin, "cli".to_string());
    let updated = service.update_flag(&ctx, row.id, field, value).await?;

    output::print_success(&format!(
        "{} {} for ({}, {})",
        if value { "Granted" } else { "Revoked" },
        field,
        updated.role,
        updated.module
    ));

    Ok(())
}
