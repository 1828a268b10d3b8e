//! Deployment DTOs

use serde::{Deserialize, Serialize};

/// Response returned once an archive has been deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error envelope the platform returns alongside non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: RemoteErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}
