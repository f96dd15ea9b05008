//! `minidash show` — Fetch once and print the dashboard as plain text.

use std::io::Write;

use clap::Args;
use minidash_client::http::HttpMetricsSource;
use minidash_common::config::DashboardConfig;
use minidash_tui::panel::{Panel, PanelState};
use minidash_tui::ui::text_lines;

use crate::output::write_lines;

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {}

/// Executes the `show` command.
///
/// Mounts a panel, waits for its fetch, and writes the heading followed by
/// one line per record to `out`. A failed fetch still writes the heading.
///
/// # Errors
///
/// Returns an error if the endpoint is invalid, the runtime cannot start,
/// `out` cannot be written, or the fetch failed.
pub fn execute<W: Write>(
    _args: &ShowArgs,
    config: &DashboardConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let source = HttpMetricsSource::from_config(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let mut panel = Panel::mount(runtime.handle(), source);
    runtime.block_on(panel.wait());

    write_lines(out, &text_lines(panel.state()))?;

    if let PanelState::Failed(reason) = panel.state() {
        anyhow::bail!("could not load metrics: {reason}");
    }
    Ok(())
}
