//! CLI command definitions and dispatch.

pub mod admin;
pub mod event;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_database::Stores;

/// EventHub: event ticketing backend
#[derive(Debug, Parser)]
#[command(name = "eventhub", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay, read from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin user management
    Admin(admin::AdminArgs),
    /// Event catalog management
    Event(event::EventArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::Event(args) => event::execute(args, &config).await,
        }
    }
}

/// Helper: open the configured stores
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::from_config(&config.database).await
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["eventhub", "serve", "--port", "8080", "--no-migrate"])
            .unwrap();

        assert_eq!(cli.config, "config/default");
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.no_migrate);
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_event_create() {
        let cli = Cli::try_parse_from([
            "eventhub",
            "event",
            "create",
            "--title",
            "Launch party",
            "--date",
            "2030-05-01T18:00:00+02:00",
            "--capacity",
            "40",
        ])
        .unwrap();

        let Commands::Event(args) = cli.command else {
            panic!("expected event command");
        };
        let event::EventCommand::Create(create) = args.command else {
            panic!("expected create");
        };
        assert_eq!(create.title, "Launch party");
        assert_eq!(create.capacity, Some(40));
        assert_eq!(create.date.to_rfc3339(), "2030-05-01T16:00:00+00:00");
    }

    #[test]
    fn test_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "eventhub", "event", "create", "--title", "x", "--date", "tomorrow",
        ]);
        assert!(result.is_err());
    }
}
