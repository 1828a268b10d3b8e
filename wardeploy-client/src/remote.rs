//! Remote deploy capability
//!
//! The publisher only talks to the platform through this trait, so tests
//! can substitute a fake and other platforms can plug in their own adapter.

use std::path::PathBuf;

use async_trait::async_trait;
use wardeploy_core::domain::account::Account;
use wardeploy_core::domain::application::ApplicationInfo;
use wardeploy_core::dto::deploy::DeployReceipt;

use crate::error::Result;
use crate::progress::UploadProgress;

/// Parameters of a single archive deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub application_id: String,
    pub environment: String,
    pub description: String,
    /// Archive location on the local filesystem
    pub war_path: PathBuf,
    /// Name the platform records for the uploaded archive
    pub archive_label: String,
}

/// Operations the publisher needs from the hosting platform
#[async_trait]
pub trait RemoteDeployClient: Send + Sync {
    /// Checks connectivity and that the credentials are accepted
    async fn ping(&self, api_key: &str, secret_key: &str) -> Result<()>;

    /// Lists the applications owned by an account
    async fn list_applications(&self, account: &Account) -> Result<Vec<ApplicationInfo>>;

    /// Uploads a web archive and activates it under the requested application
    async fn deploy_war(
        &self,
        account: &Account,
        request: &DeployRequest,
        progress: &dyn UploadProgress,
    ) -> Result<DeployReceipt>;
}
