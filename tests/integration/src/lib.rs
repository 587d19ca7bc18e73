//! Integration test utilities for the REST API
//!
//! This crate provides helpers for running end-to-end tests against
//! a real server backed by PostgreSQL.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
