//! Admin user management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use eventhub_auth::password::{PasswordHasher, PasswordValidator};
use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_service::UserService;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Grant admin rights to an existing user
    Promote {
        /// Email the user signed up with
        #[arg(short, long)]
        email: String,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let users = UserService::new(
        stores.users,
        stores.bookings,
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
    );

    match &args.command {
        AdminCommand::Promote { email } => {
            let user = users.promote_admin(email).await?;
            output::print_success(&format!("{} is now an admin.", user.email));
            output::print_kv("User ID", &user.id.to_string());
            output::print_kv("Username", &user.username);
        }
    }

    Ok(())
}
