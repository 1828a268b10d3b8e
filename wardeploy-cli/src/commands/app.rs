//! Application command handlers

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use wardeploy_publisher::Publisher;

use super::account::print_validation;
use super::validation_exit;

/// Application subcommands
#[derive(Subcommand)]
pub enum AppCommands {
    /// Check that an application id exists for an account
    Check {
        application_id: String,

        /// Account name (defaults to the first configured account)
        #[arg(long)]
        account: Option<String>,
    },
    /// List application ids starting with a prefix
    Complete {
        prefix: String,

        /// Account name (defaults to the first configured account)
        #[arg(long)]
        account: Option<String>,
    },
}

/// Handle application commands
pub async fn handle_app_command(command: AppCommands, publisher: &Publisher) -> Result<ExitCode> {
    let validation = publisher.validation();

    match command {
        AppCommands::Check {
            application_id,
            account,
        } => {
            let result = validation
                .check_application_id(&application_id, account.as_deref())
                .await;
            print_validation(&result, &format!("Application {} found", application_id));
            Ok(validation_exit(result.is_ok()))
        }
        AppCommands::Complete { prefix, account } => {
            let candidates = validation.autocomplete(&prefix, account.as_deref()).await?;
            if candidates.is_empty() {
                println!("{}", "No matching applications.".yellow());
            }
            for id in candidates {
                println!("{}", id);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
