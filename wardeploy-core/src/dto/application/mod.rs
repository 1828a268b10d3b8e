//! Application listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::application::ApplicationInfo;

/// Response of the application listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    #[serde(default)]
    pub applications: Vec<ApplicationInfo>,
}
