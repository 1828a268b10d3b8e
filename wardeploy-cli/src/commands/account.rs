//! Account command handlers
//!
//! Lists, registers, replaces and checks platform accounts.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use wardeploy_core::domain::account::Account;
use wardeploy_publisher::{Publisher, Validation, ValidationService};

use super::validation_exit;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List configured accounts (the first one is the default)
    List,
    /// Register an additional account
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        api_key: String,
        #[arg(long)]
        secret_key: String,
    },
    /// Replace every account with the contents of a JSON file
    Configure {
        /// JSON array of accounts
        file: PathBuf,
    },
    /// Check that credentials are accepted by the platform
    Check {
        #[arg(long)]
        api_key: String,
        #[arg(long)]
        secret_key: String,
    },
}

/// Handle account commands
pub async fn handle_account_command(
    command: AccountCommands,
    publisher: &Publisher,
) -> Result<ExitCode> {
    match command {
        AccountCommands::List => list_accounts(publisher),
        AccountCommands::Add {
            name,
            api_key,
            secret_key,
        } => add_account(publisher, Account::new(name, api_key, secret_key)),
        AccountCommands::Configure { file } => configure_accounts(publisher, &file),
        AccountCommands::Check {
            api_key,
            secret_key,
        } => check_account(publisher, &api_key, &secret_key).await,
    }
}

fn list_accounts(publisher: &Publisher) -> Result<ExitCode> {
    let accounts = publisher.registry().all();

    if accounts.is_empty() {
        println!("{}", "No accounts configured.".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", format!("Found {} account(s):", accounts.len()).bold());
    println!();
    for (i, account) in accounts.iter().enumerate() {
        let marker = if i == 0 { " (default)".green() } else { "".normal() };
        println!("  {} {}{}", "▸".cyan(), account.name.bold(), marker);
        println!("    API key: {}", mask(&account.api_key).dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

fn add_account(publisher: &Publisher, account: Account) -> Result<ExitCode> {
    ensure_complete(&publisher.validation(), &account)?;
    let name = account.name.clone();
    publisher.register_account(account)?;
    println!("{} Registered account {}", "✓".green(), name.bold());
    Ok(ExitCode::SUCCESS)
}

fn configure_accounts(publisher: &Publisher, file: &Path) -> Result<ExitCode> {
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?,
    );
    let accounts: Vec<Account> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {} as a list of accounts", file.display()))?;

    let validation = publisher.validation();
    for account in &accounts {
        ensure_complete(&validation, account)?;
    }

    let count = accounts.len();
    publisher.configure_accounts(accounts)?;
    println!("{} Saved {} account(s)", "✓".green(), count);
    Ok(ExitCode::SUCCESS)
}

async fn check_account(publisher: &Publisher, api_key: &str, secret_key: &str) -> Result<ExitCode> {
    let result = publisher
        .validation()
        .check_connectivity(api_key, secret_key)
        .await;
    print_validation(&result, "Credentials accepted");
    Ok(validation_exit(result.is_ok()))
}

/// Rejects accounts with a blank name or key
fn ensure_complete(validation: &ValidationService, account: &Account) -> Result<()> {
    for check in [
        validation.check_name(&account.name),
        validation.check_api_key(&account.api_key),
        validation.check_secret_key(&account.secret_key),
    ] {
        if let Validation::Error(message) = check {
            bail!("Invalid account '{}': {}", account.name, message);
        }
    }
    Ok(())
}

pub(super) fn print_validation(result: &Validation, ok_message: &str) {
    match result {
        Validation::Ok => println!("{} {}", "✓".green(), ok_message),
        Validation::Error(message) => println!("{} {}", "✗".red(), message.red()),
    }
}

/// Shows only the first characters of a credential
fn mask(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{}…", visible)
}
