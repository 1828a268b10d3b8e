//! Wardeploy CLI
//!
//! Command-line host for the publisher: manages accounts, answers
//! validation queries and deploys a build's web archive.

mod commands;
mod config;
mod console;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Overrides;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wardeploy")]
#[command(about = "Deploy build web archives to the hosting platform", long_about = None)]
struct Cli {
    /// Platform API URL
    #[arg(long, env = "WARDEPLOY_API_URL")]
    api_url: Option<String>,

    /// Accounts file
    #[arg(long, env = "WARDEPLOY_ACCOUNTS_FILE")]
    accounts_file: Option<PathBuf>,

    /// Environment label attached to deployments
    #[arg(long, env = "WARDEPLOY_ENVIRONMENT")]
    environment: Option<String>,

    /// Description used when a deployment does not supply one
    #[arg(long, env = "WARDEPLOY_DESCRIPTION")]
    description: Option<String>,

    /// Platform request timeout in seconds
    #[arg(long, env = "WARDEPLOY_REQUEST_TIMEOUT")]
    request_timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wardeploy=info,wardeploy_publisher=info,wardeploy_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Overrides {
        api_url: cli.api_url,
        accounts_file: cli.accounts_file,
        environment: cli.environment,
        description: cli.description,
        request_timeout: cli.request_timeout,
    }
    .resolve()?;

    handle_command(cli.command, config).await
}
