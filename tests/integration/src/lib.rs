//! Integration test utilities for the CMS backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
