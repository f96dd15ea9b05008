//! Unified error types for the minidash workspace.
//!
//! Higher-level crates define their own domain-specific error enums; this
//! one covers failures in the shared configuration model.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DashboardError>;
