//! # minidash-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the minidash workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and defines the metric record schema every other crate
//! speaks.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
