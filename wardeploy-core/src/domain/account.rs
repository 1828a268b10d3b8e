//! Account domain types

use serde::{Deserialize, Serialize};

/// Named credentials for the hosting platform
///
/// Accounts are replaced wholesale when configuration is saved, never patched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub api_key: String,
    pub secret_key: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

// Keeps the secret key out of logs and panic messages.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("api_key", &self.api_key)
            .field("secret_key", &"***")
            .finish()
    }
}
