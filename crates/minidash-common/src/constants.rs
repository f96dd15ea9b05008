//! System-wide constants and defaults.

/// Endpoint the metrics panel fetches from when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5002/metrics";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default UI refresh interval, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Heading shown above the metric rows.
pub const HEADING: &str = "Mini Analytics Dashboard";

/// Literal prefix rendered in front of every revenue amount.
pub const CURRENCY_PREFIX: &str = "R$";

/// Delimiter placed between the fields of a rendered row.
pub const FIELD_SEPARATOR: &str = " | ";

/// Query parameter carrying the inclusive lower date bound.
pub const QUERY_START: &str = "start";

/// Query parameter carrying the inclusive upper date bound.
pub const QUERY_END: &str = "end";

/// Date format accepted for range bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "MINIDASH_ENDPOINT";

/// Environment variable overriding the request timeout.
pub const ENV_TIMEOUT_SECS: &str = "MINIDASH_TIMEOUT_SECS";

/// Environment variable naming the log file used by the TUI.
pub const ENV_LOG_FILE: &str = "MINIDASH_LOG_FILE";

