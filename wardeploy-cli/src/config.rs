//! Configuration module
//!
//! Layers command-line flags over the environment-derived publisher configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use wardeploy_publisher::PublisherConfig;

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub accounts_file: Option<PathBuf>,
    pub environment: Option<String>,
    pub description: Option<String>,
    pub request_timeout: Option<u64>,
}

impl Overrides {
    /// Applies the flags on top of `PublisherConfig::from_env`
    pub fn resolve(self) -> Result<PublisherConfig> {
        self.apply(PublisherConfig::from_env()?)
    }

    fn apply(self, mut config: PublisherConfig) -> Result<PublisherConfig> {
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(accounts_file) = self.accounts_file {
            config.accounts_file = accounts_file;
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(description) = self.description {
            config.description = description;
        }
        if let Some(secs) = self.request_timeout {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }
}
