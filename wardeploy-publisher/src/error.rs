//! Error types for the publisher

use thiserror::Error;
use wardeploy_client::ClientError;

/// Errors surfaced by registry-backed platform lookups
#[derive(Debug, Error)]
pub enum PublisherError {
    /// No configured account matches the requested (or default) name
    #[error("{}", no_account_message(.0))]
    NoMatchingAccount(Option<String>),

    /// The platform call failed
    #[error(transparent)]
    Client(#[from] ClientError),
}

fn no_account_message(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("no account configured with name '{}'", name),
        None => "no account configured".to_string(),
    }
}
