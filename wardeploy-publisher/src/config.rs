//! Publisher configuration
//!
//! Defines where the platform API lives, where accounts are persisted and
//! the labels attached to every deployment.

use std::path::PathBuf;
use std::time::Duration;

/// Default hosting platform API endpoint
pub const DEFAULT_API_URL: &str = "https://api.cloudbees.com/api";

/// Publisher configuration
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Platform API base URL (e.g., "https://api.cloudbees.com/api")
    pub api_url: String,

    /// JSON file holding the configured accounts
    pub accounts_file: PathBuf,

    /// Environment label sent with every deployment
    pub environment: String,

    /// Description sent with a deployment unless the job supplies one
    pub description: String,

    /// Transport timeout for every platform call
    pub request_timeout: Duration,
}

impl PublisherConfig {
    /// Creates a new configuration with defaults
    pub fn new(api_url: String, accounts_file: PathBuf) -> Self {
        Self {
            api_url,
            accounts_file,
            environment: "default".to_string(),
            description: "Deployed by wardeploy".to_string(),
            request_timeout: Duration::from_secs(300),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognised environment variables (all optional):
    /// - WARDEPLOY_API_URL (default: https://api.cloudbees.com/api)
    /// - WARDEPLOY_ACCOUNTS_FILE (default: accounts.json)
    /// - WARDEPLOY_ENVIRONMENT (default: default)
    /// - WARDEPLOY_DESCRIPTION (default: Deployed by wardeploy)
    /// - WARDEPLOY_REQUEST_TIMEOUT (seconds, default: 300)
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(api_url) = std::env::var("WARDEPLOY_API_URL") {
            config.api_url = api_url;
        }

        if let Ok(accounts_file) = std::env::var("WARDEPLOY_ACCOUNTS_FILE") {
            config.accounts_file = PathBuf::from(accounts_file);
        }

        if let Ok(environment) = std::env::var("WARDEPLOY_ENVIRONMENT") {
            config.environment = environment;
        }

        if let Ok(description) = std::env::var("WARDEPLOY_DESCRIPTION") {
            config.description = description;
        }

        if let Ok(timeout) = std::env::var("WARDEPLOY_REQUEST_TIMEOUT") {
            let secs = timeout.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("WARDEPLOY_REQUEST_TIMEOUT must be a number of seconds")
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.accounts_file.as_os_str().is_empty() {
            anyhow::bail!("accounts_file cannot be empty");
        }

        if self.environment.trim().is_empty() {
            anyhow::bail!("environment cannot be empty");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.to_string(), PathBuf::from("accounts.json"))
    }
}
