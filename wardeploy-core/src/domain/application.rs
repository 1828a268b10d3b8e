//! Application domain types

use serde::{Deserialize, Serialize};

/// An application hosted on the platform, as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub id: String,
    #[serde(default)]
    pub title: String,
}
