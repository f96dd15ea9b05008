//! CLI command definitions and dispatch.

pub mod show;
pub mod watch;

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use minidash_common::config::DashboardConfig;
use minidash_common::constants::{
    DATE_FORMAT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENV_ENDPOINT, ENV_LOG_FILE,
    ENV_TIMEOUT_SECS,
};
use minidash_common::types::DateRange;

/// Mini Analytics Dashboard — order metrics at a glance.
#[derive(Parser, Debug)]
#[command(name = "minidash", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `watch`).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Metrics endpoint URL.
    #[arg(long, global = true, env = ENV_ENDPOINT, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Only include metrics on or after this date (YYYY-MM-DD).
    #[arg(long, global = true, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Only include metrics on or before this date (YYYY-MM-DD).
    #[arg(long, global = true, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Write logs to this file.
    #[arg(long, global = true, env = ENV_LOG_FILE)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive dashboard.
    Watch(watch::WatchArgs),
    /// Fetch once and print the dashboard as plain text.
    Show(show::ShowArgs),
}

impl Cli {
    /// Returns `true` when the command takes over the terminal.
    pub const fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Command::Watch(_)))
    }

    /// Builds and validates the session configuration from the global flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the date range is inverted or a value is invalid.
    pub fn config(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = DashboardConfig {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
            range: DateRange::new(self.start, self.end)?,
            log_file: self.log_file.clone(),
            ..DashboardConfig::default()
        };
        if let Some(Command::Watch(args)) = &self.command {
            config.tick_rate_ms = args.tick_rate_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got {value:?}: {e}"))
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn execute(cli: Cli, config: &DashboardConfig) -> anyhow::Result<()> {
    tracing::debug!(endpoint = %config.endpoint, range = %config.range, "configuration loaded");
    match cli.command {
        None | Some(Command::Watch(_)) => watch::execute(config),
        Some(Command::Show(args)) => show::execute(&args, config, &mut io::stdout().lock()),
    }
}
