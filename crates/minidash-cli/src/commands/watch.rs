//! `minidash watch` — Interactive terminal dashboard.

use clap::Args;
use minidash_client::http::HttpMetricsSource;
use minidash_common::config::DashboardConfig;
use minidash_common::constants::DEFAULT_TICK_RATE_MS;
use minidash_tui::app::App;
use minidash_tui::panel::Panel;

/// Arguments for the `watch` command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// UI refresh interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_RATE_MS)]
    pub tick_rate_ms: u64,
}

/// Executes the `watch` command.
///
/// The fetch runs on a background runtime while the UI loop keeps drawing;
/// leaving the dashboard drops the panel, which aborts a fetch still in
/// flight.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid or the terminal fails.
pub fn execute(config: &DashboardConfig) -> anyhow::Result<()> {
    let source = HttpMetricsSource::from_config(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(Panel::mount(runtime.handle(), source));

    minidash_tui::terminal::run(&mut app, config.tick_rate())?;
    Ok(())
}
