//! Connectivity and application listing endpoints

use tracing::debug;
use wardeploy_core::domain::account::Account;
use wardeploy_core::domain::application::ApplicationInfo;
use wardeploy_core::dto::application::ApplicationListResponse;

use crate::PlatformClient;
use crate::error::Result;

impl PlatformClient {
    /// Check that the platform is reachable and accepts the credentials
    ///
    /// # Arguments
    /// * `api_key` - Account API key
    /// * `secret_key` - Account secret key
    pub(crate) async fn ping_platform(&self, api_key: &str, secret_key: &str) -> Result<()> {
        let url = format!("{}/v1/ping", self.base_url);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .basic_auth(api_key, Some(secret_key))
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// List the applications owned by an account
    ///
    /// # Returns
    /// Applications in the order the platform lists them
    pub(crate) async fn list_account_applications(
        &self,
        account: &Account,
    ) -> Result<Vec<ApplicationInfo>> {
        let url = format!("{}/v1/applications", self.base_url);
        debug!("GET {} (account {})", url, account.name);
        let response = self
            .client
            .get(&url)
            .query(&[("account", account.name.as_str())])
            .basic_auth(&account.api_key, Some(&account.secret_key))
            .send()
            .await?;

        let listing: ApplicationListResponse = self.handle_response(response).await?;
        Ok(listing.applications)
    }
}
