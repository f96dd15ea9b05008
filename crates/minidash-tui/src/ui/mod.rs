//! Views for the dashboard.
//!
//! [`render`] draws the interactive screen; [`text_lines`] produces the same
//! content as plain lines for non-interactive output.

pub mod dashboard;
pub mod metrics;

use minidash_common::constants::HEADING;
use ratatui::Frame;

use crate::app::App;
use crate::panel::PanelState;

/// Renders the whole dashboard for the current frame.
pub fn render(frame: &mut Frame, app: &App) {
    dashboard::render_dashboard(frame, app);
}

/// Heading followed by one line per record, in server order.
#[must_use]
pub fn text_lines(state: &PanelState) -> Vec<String> {
    std::iter::once(HEADING.to_string())
        .chain(metrics::rows(state.records()))
        .collect()
}
