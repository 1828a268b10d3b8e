//! Deployment domain types

use serde::{Deserialize, Serialize};

/// Per-job deployment settings
///
/// When `account_name` is absent the registry's default account is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentSettings {
    pub account_name: Option<String>,
    pub application_id: String,
    /// Overrides the configured deployment description (e.g. with a build id)
    #[serde(default)]
    pub description: Option<String>,
}

impl DeploymentSettings {
    pub fn new(account_name: Option<String>, application_id: impl Into<String>) -> Self {
        Self {
            account_name,
            application_id: application_id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of one deployment attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentOutcome {
    Success,
    /// No account matched the requested (or default) name
    ConfigurationError(String),
    NoArtifactFound,
    /// The platform call failed; carries the original message
    RemoteError(String),
}

impl DeploymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeploymentOutcome::Success)
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            DeploymentOutcome::Success => 0,
            DeploymentOutcome::ConfigurationError(_) => 2,
            DeploymentOutcome::NoArtifactFound | DeploymentOutcome::RemoteError(_) => 1,
        }
    }
}

impl std::fmt::Display for DeploymentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentOutcome::Success => write!(f, "deployment succeeded"),
            DeploymentOutcome::ConfigurationError(msg) => write!(f, "configuration error: {}", msg),
            DeploymentOutcome::NoArtifactFound => write!(f, "no war artifact found"),
            DeploymentOutcome::RemoteError(msg) => write!(f, "remote error: {}", msg),
        }
    }
}
