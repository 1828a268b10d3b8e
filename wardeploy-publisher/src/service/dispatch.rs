//! Deployment dispatch
//!
//! Runs one deployment attempt for a finished build:
//! - Resolving the account from the registry
//! - Locating the web archive among the recorded artifacts
//! - Uploading it through the platform client, relaying progress
//!
//! Every failure is turned into a [`DeploymentOutcome`]; nothing escapes as an error.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};
use wardeploy_client::{DeployRequest, RemoteDeployClient, UploadProgress};
use wardeploy_core::domain::artifact::ArtifactGroup;
use wardeploy_core::domain::deployment::{DeploymentOutcome, DeploymentSettings};

use crate::config::PublisherConfig;
use crate::registry::AccountRegistry;
use crate::resolver::find_deployable_artifact;
use crate::service::log_sink::LogSink;

/// Orchestrates single-account, single-archive deployments
pub struct DeploymentDispatcher {
    registry: Arc<AccountRegistry>,
    client: Arc<dyn RemoteDeployClient>,
    log: Arc<dyn LogSink>,
    environment: String,
    description: String,
}

impl DeploymentDispatcher {
    /// Creates a dispatcher
    ///
    /// # Arguments
    /// * `registry` - Accounts to resolve against
    /// * `client` - Platform the archive is deployed to
    /// * `log` - Build log receiving status lines
    /// * `config` - Supplies the environment label and default description
    pub fn new(
        registry: Arc<AccountRegistry>,
        client: Arc<dyn RemoteDeployClient>,
        log: Arc<dyn LogSink>,
        config: &PublisherConfig,
    ) -> Self {
        Self {
            registry,
            client,
            log,
            environment: config.environment.clone(),
            description: config.description.clone(),
        }
    }

    /// Deploys the build's web archive according to `settings`
    ///
    /// `on_progress` is called zero or more times while the archive uploads,
    /// always before this method returns.
    pub async fn deploy(
        &self,
        settings: &DeploymentSettings,
        artifacts: &[ArtifactGroup],
        on_progress: &dyn UploadProgress,
    ) -> DeploymentOutcome {
        let requested = settings.account_name.as_deref();
        let Some(account) = self.registry.lookup(requested) else {
            let message = match requested {
                Some(name) => format!("no account configured with name '{}'", name),
                None => "no account configured".to_string(),
            };
            warn!("Deployment of '{}' aborted: {}", settings.application_id, message);
            self.log.error(&format!("Deployment aborted: {}", message));
            return DeploymentOutcome::ConfigurationError("no matching account".to_string());
        };

        info!(
            "Deploying to application '{}' with account '{}'",
            settings.application_id, account.name
        );
        self.log.info(&format!(
            "Deploying {}::{}",
            account.name, settings.application_id
        ));

        if artifacts.is_empty() {
            self.log.warn(
                "No artifacts have been recorded, are you sure your build produced some?",
            );
            return DeploymentOutcome::NoArtifactFound;
        }

        for group in artifacts {
            let paths: Vec<&str> = group.iter().map(|r| r.file_path.as_str()).collect();
            self.log.info(&format!("Artifacts [{}]", paths.join(", ")));
            for record in group {
                if record.is_war() {
                    self.log.info(&format!("War artifact {}", record.file_path));
                } else {
                    self.log.debug(&format!(
                        "Skipping {} artifact {}",
                        record.artifact_type, record.file_path
                    ));
                }
            }
        }

        let Some(war_path) = find_deployable_artifact(artifacts) else {
            self.log.warn(
                "No war artifact has been found, are you sure your build produced one?",
            );
            return DeploymentOutcome::NoArtifactFound;
        };
        self.log.info(&format!("Deploying war {}", war_path));

        let request = DeployRequest {
            application_id: settings.application_id.clone(),
            environment: self.environment.clone(),
            description: settings
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            war_path: PathBuf::from(war_path),
            archive_label: war_path.to_string(),
        };

        let progress = |delta: u64, written: u64, total: u64| {
            self.log.info(&format!(
                "deltaCount {}, totalWritten {}, {}",
                delta, written, total
            ));
            on_progress.handle_bytes_written(delta, written, total);
        };

        match self.client.deploy_war(&account, &request, &progress).await {
            Ok(receipt) => {
                info!(
                    "Application '{}' deployed (deployment {})",
                    settings.application_id, receipt.id
                );
                match receipt.url {
                    Some(url) => self.log.info(&format!("Deployed to {}", url)),
                    None => self.log.info("Deployment succeeded"),
                }
                DeploymentOutcome::Success
            }
            Err(e) => {
                let message = e.to_string();
                error!(
                    "Deployment of '{}' failed: {}",
                    settings.application_id, message
                );
                self.log
                    .error(&format!("Issue during deploying war: {}", message));
                DeploymentOutcome::RemoteError(message)
            }
        }
    }
}
