//! Configuration validation
//!
//! Synchronous-style checks answering the host's configuration form:
//! required fields, credential connectivity, and application id lookups.

use std::sync::Arc;

use tracing::error;
use wardeploy_client::RemoteDeployClient;
use wardeploy_core::domain::application::ApplicationInfo;

use crate::error::PublisherError;
use crate::registry::AccountRegistry;

/// Result of a single form check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    Error(String),
}

impl Validation {
    pub fn error(message: impl Into<String>) -> Self {
        Validation::Error(message.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }

    /// The error message, if the check failed
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Ok => None,
            Validation::Error(message) => Some(message),
        }
    }
}

/// Checks a required field; whitespace-only counts as empty
pub fn check_non_empty(value: &str, name: &str) -> Validation {
    if value.trim().is_empty() {
        Validation::error(format!("{} cannot be empty", name))
    } else {
        Validation::Ok
    }
}

/// Answers validation and autocompletion requests from the configuration UI
pub struct ValidationService {
    registry: Arc<AccountRegistry>,
    client: Arc<dyn RemoteDeployClient>,
}

impl ValidationService {
    pub fn new(registry: Arc<AccountRegistry>, client: Arc<dyn RemoteDeployClient>) -> Self {
        Self { registry, client }
    }

    pub fn check_name(&self, name: &str) -> Validation {
        check_non_empty(name, "name")
    }

    pub fn check_api_key(&self, api_key: &str) -> Validation {
        check_non_empty(api_key, "apiKey")
    }

    pub fn check_secret_key(&self, secret_key: &str) -> Validation {
        check_non_empty(secret_key, "secretKey")
    }

    /// Verifies the credentials against the platform
    ///
    /// A structured platform error is shown verbatim; anything else is logged
    /// and reported generically.
    pub async fn check_connectivity(&self, api_key: &str, secret_key: &str) -> Validation {
        let secret = self.check_secret_key(secret_key);
        if !secret.is_ok() {
            return secret;
        }
        let key = self.check_api_key(api_key);
        if !key.is_ok() {
            return key;
        }

        match self.client.ping(api_key, secret_key).await {
            Ok(()) => Validation::Ok,
            Err(e) => match e.remote_message() {
                Some(message) => Validation::error(message),
                None => {
                    error!("Error during calling platform api: {}", e);
                    Validation::error("Unknown error, check server logs")
                }
            },
        }
    }

    /// Checks that `application_id` exists for the account
    ///
    /// On a miss the error lists every known application id.
    pub async fn check_application_id(
        &self,
        application_id: &str,
        account_name: Option<&str>,
    ) -> Validation {
        let required = check_non_empty(application_id, "applicationId");
        if !required.is_ok() {
            return required;
        }

        let applications = match self.applications(account_name).await {
            Ok(applications) => applications,
            Err(e) => return Validation::error(format!("error during check applicationId {}", e)),
        };

        if applications.iter().any(|app| app.id == application_id) {
            return Validation::Ok;
        }

        let ids: Vec<&str> = applications.iter().map(|app| app.id.as_str()).collect();
        Validation::error(format!("possible applicationIds are {}", ids.join(" ")))
    }

    /// Application ids starting with `partial`, in platform listing order
    pub async fn autocomplete(
        &self,
        partial: &str,
        account_name: Option<&str>,
    ) -> Result<Vec<String>, PublisherError> {
        let applications = self.applications(account_name).await?;
        Ok(applications
            .into_iter()
            .filter(|app| app.id.starts_with(partial))
            .map(|app| app.id)
            .collect())
    }

    async fn applications(
        &self,
        account_name: Option<&str>,
    ) -> Result<Vec<ApplicationInfo>, PublisherError> {
        let account = self
            .registry
            .lookup(account_name)
            .ok_or_else(|| PublisherError::NoMatchingAccount(account_name.map(str::to_string)))?;
        Ok(self.client.list_applications(&account).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardeploy_core::domain::account::Account;

    use crate::testing::{Call, FakeClient, Failure};

    fn setup(client: FakeClient) -> (ValidationService, Arc<FakeClient>) {
        let client = Arc::new(client);
        let registry = Arc::new(AccountRegistry::with_accounts(vec![
            Account::new("acme", "k1", "s1"),
            Account::new("globex", "k2", "s2"),
        ]));
        (ValidationService::new(registry, client.clone()), client)
    }

    #[test]
    fn test_check_non_empty() {
        assert_eq!(check_non_empty("x", "name"), Validation::Ok);
        assert_eq!(
            check_non_empty("", "name"),
            Validation::error("name cannot be empty")
        );
        assert_eq!(
            check_non_empty("  \t", "apiKey").message(),
            Some("apiKey cannot be empty")
        );
    }

    #[tokio::test]
    async fn test_connectivity_requires_both_keys_before_pinging() {
        let (service, client) = setup(FakeClient::new());

        assert_eq!(
            service.check_connectivity("key", "").await,
            Validation::error("secretKey cannot be empty")
        );
        assert_eq!(
            service.check_connectivity("", "secret").await,
            Validation::error("apiKey cannot be empty")
        );
        assert!(client.calls().is_empty());

        assert!(service.check_connectivity("key", "secret").await.is_ok());
        assert_eq!(
            client.calls(),
            vec![Call::Ping {
                api_key: "key".to_string(),
                secret_key: "secret".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_connectivity_shows_platform_message() {
        let (service, _) =
            setup(FakeClient::new().failing_ping(Failure::Remote("bad credentials".to_string())));
        assert_eq!(
            service.check_connectivity("key", "secret").await,
            Validation::error("bad credentials")
        );
    }

    #[tokio::test]
    async fn test_connectivity_hides_untyped_failures() {
        let (service, _) =
            setup(FakeClient::new().failing_ping(Failure::Untyped("<html>".to_string())));
        assert_eq!(
            service.check_connectivity("key", "secret").await,
            Validation::error("Unknown error, check server logs")
        );
    }

    #[tokio::test]
    async fn test_application_id_found() {
        let (service, _) = setup(FakeClient::new().with_applications(&["app1", "app2"]));
        assert!(service.check_application_id("app2", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_application_id_miss_lists_known_ids() {
        let (service, _) = setup(FakeClient::new().with_applications(&["app1", "app2"]));

        let result = service.check_application_id("app3", None).await;

        let message = result.message().unwrap();
        assert!(message.contains("app1"));
        assert!(message.contains("app2"));
        assert_eq!(message, "possible applicationIds are app1 app2");
    }

    #[tokio::test]
    async fn test_application_id_uses_named_account() {
        let (service, client) = setup(FakeClient::new().with_applications(&["app1"]));

        service.check_application_id("app1", Some("globex")).await;

        assert_eq!(
            client.calls(),
            vec![Call::List {
                account: "globex".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_application_id_failures_become_errors() {
        let (service, client) = setup(FakeClient::new());
        assert_eq!(
            service.check_application_id(" ", None).await,
            Validation::error("applicationId cannot be empty")
        );

        let missing = service.check_application_id("app1", Some("missing")).await;
        assert!(missing.message().unwrap().contains("missing"));
        assert!(client.calls().is_empty());

        let (failing, _) =
            setup(FakeClient::new().failing_list(Failure::Remote("denied".to_string())));
        let denied = failing.check_application_id("app1", None).await;
        assert!(denied.message().unwrap().contains("denied"));
    }

    #[tokio::test]
    async fn test_autocomplete_prefix_in_listing_order() {
        let (service, _) = setup(
            FakeClient::new().with_applications(&["acme/web", "acme/api", "Acme/admin", "other"]),
        );

        let candidates = service.autocomplete("acme/", None).await.unwrap();
        assert_eq!(candidates, vec!["acme/web".to_string(), "acme/api".to_string()]);

        assert!(service.autocomplete("zzz", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_autocomplete_unknown_account_is_error() {
        let (service, _) = setup(FakeClient::new());
        let err = service.autocomplete("a", Some("missing")).await.unwrap_err();
        assert!(matches!(err, PublisherError::NoMatchingAccount(Some(_))));
    }
}
