//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod account;
mod app;
mod deploy;

pub use account::AccountCommands;
pub use app::AppCommands;
pub use deploy::DeployArgs;

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;
use wardeploy_publisher::{Publisher, PublisherConfig};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Account configuration
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Application lookups
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Deploy a build's web archive
    Deploy(DeployArgs),
}

/// Handle a CLI command
///
/// Builds the publisher from `config` and routes the command to its handler.
pub async fn handle_command(command: Commands, config: PublisherConfig) -> Result<ExitCode> {
    let publisher = Publisher::from_config(config)?;

    match command {
        Commands::Account { command } => account::handle_account_command(command, &publisher).await,
        Commands::App { command } => app::handle_app_command(command, &publisher).await,
        Commands::Deploy(args) => deploy::handle_deploy(args, &publisher).await,
    }
}

/// Exit status for a validation answer
fn validation_exit(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
