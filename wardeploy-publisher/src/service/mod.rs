//! Service layer
//!
//! Services hold the publisher's business logic: dispatching a deployment
//! for a finished build and answering configuration-form validation
//! requests. Collaborators (registry, platform client, log sink) are
//! injected so tests can substitute fakes.

mod dispatch;
mod log_sink;
mod validation;

pub use dispatch::DeploymentDispatcher;
pub use log_sink::{BufferedLogSink, LogSink};
pub use validation::{Validation, ValidationService};
