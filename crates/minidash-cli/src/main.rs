//! # minidash — Mini Analytics Dashboard CLI
//!
//! Fetches aggregated order metrics from the analytics endpoint once and
//! shows them, either in an interactive terminal view or as plain lines.

mod commands;
mod logging;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    logging::init(config.log_file.as_deref(), cli.is_interactive())?;
    commands::execute(cli, &config)
}
