//! Account registry
//!
//! Process-wide set of named platform credentials. Readers take cheap
//! snapshots; a bulk replace swaps the whole list at once, so a reader sees
//! either the old or the new configuration in full. Saving the configuration
//! is serialized, so the persisted list always matches the live one.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use anyhow::Result;
use tracing::info;
use wardeploy_core::domain::account::Account;
use wardeploy_core::domain::deployment::DeploymentSettings;

use crate::store::AccountStore;

/// Ordered, atomically replaceable list of accounts
///
/// Names are expected to be unique but this is not enforced; lookups return
/// the first match in registry order. The first account is the default.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: RwLock<Arc<Vec<Account>>>,
    /// Held across swap and save by `configure` and `register`
    admin: Mutex<()>,
}

impl AccountRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `accounts` in the given order
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(Arc::new(accounts)),
            admin: Mutex::new(()),
        }
    }

    /// Builds the registry from persisted configuration
    pub fn load(store: &dyn AccountStore) -> Result<Self> {
        let accounts = store.load()?;
        info!("Loaded {} account(s)", accounts.len());
        Ok(Self::with_accounts(accounts))
    }

    /// Substitutes the entire account list
    pub fn replace_all(&self, accounts: Vec<Account>) {
        self.install(Arc::new(accounts));
    }

    fn install(&self, next: Arc<Vec<Account>>) {
        *self.accounts.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Snapshot of the current accounts
    pub fn all(&self) -> Arc<Vec<Account>> {
        Arc::clone(&*self.accounts.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Appends an account to the live list
    pub fn add(&self, account: Account) {
        self.append(account);
    }

    /// Appends under the write lock and returns the list that was installed
    fn append(&self, account: Account) -> Arc<Vec<Account>> {
        let mut guard = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        // Outstanding snapshots keep the old list; we copy on write.
        Arc::make_mut(&mut *guard).push(account);
        Arc::clone(&*guard)
    }

    /// Finds an account by exact name, or the default account when `name` is absent
    pub fn lookup(&self, name: Option<&str>) -> Option<Account> {
        let accounts = self.all();
        match name {
            None => accounts.first().cloned(),
            Some(name) => accounts.iter().find(|a| a.name == name).cloned(),
        }
    }

    /// The first account in registry order
    pub fn default_account(&self) -> Option<Account> {
        self.lookup(None)
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Replaces the account list and persists it
    ///
    /// The in-memory swap happens first; a failed save is reported but the
    /// new configuration stays live, matching a save-after-bind admin flow.
    pub fn configure(&self, accounts: Vec<Account>, store: &dyn AccountStore) -> Result<()> {
        let _admin = self.admin.lock().unwrap_or_else(PoisonError::into_inner);
        info!("Configuring {} account(s)", accounts.len());
        let next = Arc::new(accounts);
        self.install(Arc::clone(&next));
        store.save(&next)
    }

    /// Appends an account and persists the resulting list
    pub fn register(&self, account: Account, store: &dyn AccountStore) -> Result<()> {
        let _admin = self.admin.lock().unwrap_or_else(PoisonError::into_inner);
        info!("Registering account '{}'", account.name);
        let next = self.append(account);
        store.save(&next)
    }

    /// Binds job settings, pinning the default account when no name is given
    ///
    /// Returns `None` when no name is given and the registry is empty, since
    /// such a job has nothing to deploy with.
    pub fn bind_settings(
        &self,
        account_name: Option<String>,
        application_id: impl Into<String>,
    ) -> Option<DeploymentSettings> {
        let account_name = match account_name {
            Some(name) => name,
            None => self.default_account()?.name,
        };
        Some(DeploymentSettings::new(Some(account_name), application_id))
    }
}
