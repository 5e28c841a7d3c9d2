//! CLI command definitions and dispatch.

pub mod migrate;
pub mod permission;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use busdesk_core::error::AppError;

/// Rivera BusDesk — bus transport back-office
#[derive(Debug, Parser)]
#[command(name = "busdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the BusDesk server
    Serve(serve::ServeArgs),
    /// Run pending database migrations
    Migrate,
    /// Provision the default permission matrix
    Seed(seed::SeedArgs),
    /// Module permission management
    Permission(permission::PermissionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Seed(args) => seed::execute(args, &self.config).await,
            Commands::Permission(args) => {
                permission::execute(args, &self.config, self.format).await
            }
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<busdesk_core::config::AppConfig, AppError> {
    busdesk_core::config::AppConfig::load_file(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &busdesk_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = busdesk_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
