//! Deploy command handler

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use tracing::debug;
use wardeploy_core::domain::artifact::ArtifactGroup;
use wardeploy_core::domain::deployment::DeploymentSettings;
use wardeploy_publisher::Publisher;

use crate::console::ConsoleLogSink;

/// Arguments of the deploy command
#[derive(Args)]
pub struct DeployArgs {
    /// Application to deploy to
    #[arg(long)]
    application_id: String,

    /// Account name (defaults to the first configured account)
    #[arg(long)]
    account: Option<String>,

    /// JSON file listing the build's recorded artifact groups
    #[arg(long)]
    artifacts: PathBuf,

    /// Deployment description, e.g. the build id
    #[arg(long)]
    description: Option<String>,
}

/// Handle the deploy command
pub async fn handle_deploy(args: DeployArgs, publisher: &Publisher) -> Result<ExitCode> {
    let artifacts = read_artifacts(&args.artifacts)?;
    debug!(
        "Read {} artifact group(s) from {}",
        artifacts.len(),
        args.artifacts.display()
    );

    let mut settings = publisher
        .registry()
        .bind_settings(args.account.clone(), args.application_id.clone())
        .unwrap_or_else(|| DeploymentSettings::new(args.account, args.application_id));
    settings.description = args.description;

    let outcome = publisher
        .dispatcher(Arc::new(ConsoleLogSink))
        .deploy(&settings, &artifacts, &|_: u64, _: u64, _: u64| {})
        .await;

    if outcome.is_success() {
        println!("{} {}", "✓".green(), outcome);
    } else {
        println!("{} {}", "✗".red(), outcome.to_string().red());
    }

    Ok(ExitCode::from(outcome.exit_code() as u8))
}

/// Reads the artifact manifest written by the build
fn read_artifacts(path: &Path) -> Result<Vec<ArtifactGroup>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to parse {} - expected an array of artifact groups",
            path.display()
        )
    })
}
