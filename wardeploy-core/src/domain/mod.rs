//! Core domain types
//!
//! These types are shared between the publisher (registry, dispatch,
//! validation), the platform client and the command-line adapter.

pub mod account;
pub mod application;
pub mod artifact;
pub mod deployment;
pub mod log;
