//! Seed the default permission matrix.

use clap::Args;

use busdesk_core::error::AppError;
use busdesk_database::repositories::permission::PermissionRepository;
use busdesk_entity::permission::Capabilities;
use busdesk_entity::{AppModule, Role};

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Execute the seed command.
///
/// Provisions one row per (role, module) pair with all-false flags.
/// Idempotent: existing rows are left untouched, so re-running after
/// an administrator has granted capabilities changes nothing.
pub async fn execute(args: &SeedArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if !args.yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("Provision default permission rows for every (role, module) pair?")
            .default(true)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let pool = super::create_db_pool(&config).await?;
    let repo = PermissionRepository::new(pool);

    let mut inserted = 0u32;
    let mut skipped = 0u32;
    for role in Role::ALL {
        for module in AppModule::ALL {
            if repo.seed_row(role, module, Capabilities::NONE).await? {
                inserted += 1;
            } else {
                skipped += 1;
            }
        }
    }

    output::print_success(&format!(
        "Seed complete: {} rows inserted, {} already present.",
        inserted, skipped
    ));

    Ok(())
}
