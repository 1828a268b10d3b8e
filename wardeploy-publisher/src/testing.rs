//! Fake platform client for tests

use std::sync::Mutex;

use async_trait::async_trait;
use wardeploy_client::{ClientError, DeployRequest, RemoteDeployClient, Result, UploadProgress};
use wardeploy_core::domain::account::Account;
use wardeploy_core::domain::application::ApplicationInfo;
use wardeploy_core::dto::deploy::DeployReceipt;

/// How a fake call should fail
#[derive(Debug, Clone)]
pub enum Failure {
    /// Structured platform error carrying this message
    Remote(String),
    /// Non-success status without a structured body
    Untyped(String),
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Failure::Remote(message) => ClientError::Remote {
                status: 400,
                message: message.clone(),
            },
            Failure::Untyped(body) => ClientError::api_error(500, body.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ping { api_key: String, secret_key: String },
    List { account: String },
    Deploy { account: String, request: DeployRequest },
}

/// Records every call and answers from canned data
#[derive(Default)]
pub struct FakeClient {
    applications: Vec<ApplicationInfo>,
    ping_failure: Option<Failure>,
    list_failure: Option<Failure>,
    deploy_failure: Option<Failure>,
    upload_chunks: Vec<u64>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_applications(mut self, ids: &[&str]) -> Self {
        self.applications = ids
            .iter()
            .map(|id| ApplicationInfo {
                id: id.to_string(),
                title: format!("{} title", id),
            })
            .collect();
        self
    }

    pub fn failing_ping(mut self, failure: Failure) -> Self {
        self.ping_failure = Some(failure);
        self
    }

    pub fn failing_list(mut self, failure: Failure) -> Self {
        self.list_failure = Some(failure);
        self
    }

    pub fn failing_deploy(mut self, failure: Failure) -> Self {
        self.deploy_failure = Some(failure);
        self
    }

    /// Chunk sizes reported through the progress listener during deploy
    pub fn with_upload_chunks(mut self, chunks: &[u64]) -> Self {
        self.upload_chunks = chunks.to_vec();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deploy_calls(&self) -> Vec<DeployRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Deploy { request, .. } => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RemoteDeployClient for FakeClient {
    async fn ping(&self, api_key: &str, secret_key: &str) -> Result<()> {
        self.record(Call::Ping {
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
        });
        match &self.ping_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    async fn list_applications(&self, account: &Account) -> Result<Vec<ApplicationInfo>> {
        self.record(Call::List {
            account: account.name.clone(),
        });
        match &self.list_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.applications.clone()),
        }
    }

    async fn deploy_war(
        &self,
        account: &Account,
        request: &DeployRequest,
        progress: &dyn UploadProgress,
    ) -> Result<DeployReceipt> {
        self.record(Call::Deploy {
            account: account.name.clone(),
            request: request.clone(),
        });

        let total: u64 = self.upload_chunks.iter().sum();
        let mut written = 0;
        for &delta in &self.upload_chunks {
            written += delta;
            progress.handle_bytes_written(delta, written, total);
        }

        match &self.deploy_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(DeployReceipt {
                id: format!("{}-1", request.application_id),
                url: None,
            }),
        }
    }
}
