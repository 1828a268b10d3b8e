//! Wardeploy Platform Client
//!
//! A small, type-safe HTTP client for the hosting platform API.
//!
//! The publisher depends only on the [`RemoteDeployClient`] trait;
//! [`PlatformClient`] is the production implementation backed by `reqwest`.
//!
//! # Example
//!
//! ```no_run
//! use wardeploy_client::{PlatformClient, RemoteDeployClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wardeploy_client::ClientError> {
//!     let client = PlatformClient::new("https://api.cloudbees.com/api");
//!     client.ping("my-api-key", "my-secret").await?;
//!     Ok(())
//! }
//! ```

mod applications;
mod deploy;
pub mod error;
mod progress;
mod remote;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use progress::UploadProgress;
pub use remote::{DeployRequest, RemoteDeployClient};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use wardeploy_core::domain::account::Account;
use wardeploy_core::domain::application::ApplicationInfo;
use wardeploy_core::dto::deploy::{DeployReceipt, ErrorResponse};

/// HTTP client for the hosting platform API
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the platform API (e.g., "https://api.cloudbees.com/api")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    ///
    /// # Example
    /// ```
    /// use wardeploy_client::PlatformClient;
    ///
    /// let client = PlatformClient::new("https://api.cloudbees.com/api");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use wardeploy_client::PlatformClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PlatformClient::with_client("https://api.cloudbees.com/api", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the platform API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not needed
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}

/// Turns a non-success body into a typed remote error when the platform sent one
fn classify_error(status: u16, body: String) -> ClientError {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => ClientError::Remote {
            status,
            message: envelope.error.message,
        },
        Err(_) => ClientError::api_error(status, body),
    }
}

#[async_trait]
impl RemoteDeployClient for PlatformClient {
    async fn ping(&self, api_key: &str, secret_key: &str) -> Result<()> {
        self.ping_platform(api_key, secret_key).await
    }

    async fn list_applications(&self, account: &Account) -> Result<Vec<ApplicationInfo>> {
        self.list_account_applications(account).await
    }

    async fn deploy_war(
        &self,
        account: &Account,
        request: &DeployRequest,
        progress: &dyn UploadProgress,
    ) -> Result<DeployReceipt> {
        self.deploy_archive(account, request, progress).await
    }
}
