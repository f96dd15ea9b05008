//! # minidash-tui
//!
//! Interactive terminal dashboard for the analytics metrics endpoint.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A metrics panel that fetches once on mount and renders one row per record.
//! - A status line showing the endpoint and whether the fetch is pending,
//!   loaded, or failed.
//! - Plain-text rendering of the same rows for non-interactive output.

pub mod app;
pub mod event;
pub mod panel;
pub mod terminal;
pub mod ui;
