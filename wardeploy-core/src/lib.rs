//! Wardeploy Core
//!
//! Core types for the wardeploy publisher.
//!
//! This crate contains:
//! - Domain types: accounts, recorded artifacts, deployment settings and outcomes
//! - DTOs: request/response bodies exchanged with the hosting platform API

pub mod domain;
pub mod dto;
