//! Database migration management commands.

use clap::{Args, Subcommand};

use eventhub_core::config::{AppConfig, StoreProvider};
use eventhub_core::error::AppError;
use eventhub_database::DatabasePool;
use eventhub_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(
            "Migrations apply only to the postgres provider",
        ));
    }

    match &args.command {
        MigrateCommand::Run => {
            let db = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
