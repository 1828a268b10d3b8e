//! Wardeploy Publisher
//!
//! Post-build step that deploys a build's web archive to the hosting platform.
//!
//! Architecture:
//! - Registry: process-wide account credentials with atomic bulk replace
//! - Store: persistence of the registry between runs
//! - Resolver: picks the web archive out of the build's recorded artifacts
//! - Services: deployment dispatch and configuration-form validation
//!
//! [`Publisher`] wires these together from a [`PublisherConfig`].

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::PublisherConfig;
pub use error::PublisherError;
pub use registry::AccountRegistry;
pub use resolver::find_deployable_artifact;
pub use service::{BufferedLogSink, DeploymentDispatcher, LogSink, Validation, ValidationService};
pub use store::{AccountStore, JsonFileStore, MemoryStore};

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use wardeploy_client::{PlatformClient, RemoteDeployClient};
use wardeploy_core::domain::account::Account;

/// Publisher components built from one configuration
pub struct Publisher {
    config: PublisherConfig,
    store: Arc<dyn AccountStore>,
    registry: Arc<AccountRegistry>,
    client: Arc<dyn RemoteDeployClient>,
}

impl Publisher {
    /// Loads accounts from the configured file and connects to the platform API
    pub fn from_config(config: PublisherConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let client = Arc::new(PlatformClient::with_client(config.api_url.clone(), http));
        let store = Arc::new(JsonFileStore::new(config.accounts_file.clone()));

        info!(
            "Publisher configured: api_url={}, accounts_file={}",
            config.api_url,
            config.accounts_file.display()
        );
        Self::with_parts(config, store, client)
    }

    /// Builds a publisher from explicit collaborators
    pub fn with_parts(
        config: PublisherConfig,
        store: Arc<dyn AccountStore>,
        client: Arc<dyn RemoteDeployClient>,
    ) -> Result<Self> {
        let registry = AccountRegistry::load(store.as_ref()).context("Failed to load accounts")?;
        Ok(Self {
            config,
            store,
            registry: Arc::new(registry),
            client,
        })
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<AccountRegistry> {
        &self.registry
    }

    /// Replaces every account and saves the configuration
    pub fn configure_accounts(&self, accounts: Vec<Account>) -> Result<()> {
        self.registry.configure(accounts, self.store.as_ref())
    }

    /// Appends one account and saves the configuration
    pub fn register_account(&self, account: Account) -> Result<()> {
        self.registry.register(account, self.store.as_ref())
    }

    /// Dispatcher writing its build log to `log`
    pub fn dispatcher(&self, log: Arc<dyn LogSink>) -> DeploymentDispatcher {
        DeploymentDispatcher::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.client),
            log,
            &self.config,
        )
    }

    pub fn validation(&self) -> ValidationService {
        ValidationService::new(Arc::clone(&self.registry), Arc::clone(&self.client))
    }
}
