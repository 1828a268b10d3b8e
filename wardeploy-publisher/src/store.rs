//! Account persistence
//!
//! The registry is loaded from an [`AccountStore`] at startup and written
//! back whenever the account configuration is saved.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use wardeploy_core::domain::account::Account;

/// Durable storage for the configured accounts
pub trait AccountStore: Send + Sync {
    /// Reads the saved accounts, in registry order
    fn load(&self) -> Result<Vec<Account>>;

    /// Replaces the saved accounts
    fn save(&self, accounts: &[Account]) -> Result<()>;
}

/// Stores accounts as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let accounts = serde_json::from_reader(BufReader::new(file)).with_context(|| {
            format!(
                "Failed to parse {} - Invalid JSON format (expected array of accounts)",
                self.path.display()
            )
        })?;
        Ok(accounts)
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Readers of the target only ever see a complete file.
        let tmp = self.path.with_extension("json.tmp");
        let file =
            File::create(&tmp).with_context(|| format!("Failed to create {}", tmp.display()))?;
        serde_json::to_writer_pretty(&file, accounts)
            .with_context(|| format!("Failed to write to {}", tmp.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to flush {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store, mostly useful for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

impl AccountStore for MemoryStore {
    fn load(&self) -> Result<Vec<Account>> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock account store: {}", e))?;
        Ok(accounts.clone())
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        let mut saved = self
            .accounts
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock account store: {}", e))?;
        *saved = accounts.to_vec();
        Ok(())
    }
}
