//! Global configuration model for the dashboard.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TICK_RATE_MS, DEFAULT_TIMEOUT_SECS};
use crate::error::{DashboardError, Result};
use crate::types::DateRange;

/// Root configuration for a dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// URL the metrics are fetched from.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional date bounds forwarded to the endpoint.
    pub range: DateRange,
    /// UI refresh interval in milliseconds.
    pub tick_rate_ms: u64,
    /// File receiving log output while the TUI owns the terminal.
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// UI refresh interval as a [`Duration`].
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Checks the values that cannot be expressed through the type system.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Config` for an empty endpoint or a zero
    /// timeout or tick rate. URL syntax and scheme are checked by the source
    /// that parses the endpoint.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(DashboardError::Config {
                message: "endpoint must not be empty".into(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(DashboardError::Config {
                message: "timeout must be at least one second".into(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(DashboardError::Config {
                message: "tick rate must be non-zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            range: DateRange::unbounded(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
        }
    }
}
