//! Data Transfer Objects for the hosting platform API
//!
//! Request and response bodies exchanged between the platform client and
//! the remote service.

pub mod application;
pub mod deploy;
