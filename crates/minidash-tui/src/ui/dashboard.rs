//! Main dashboard layout.
//!
//! Header with the heading, the record list, and a one-line footer with
//! the endpoint, fetch status, and key bindings.

use minidash_common::constants::HEADING;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;
use crate::panel::PanelState;
use crate::ui::metrics::row_lines;

const KEY_HINTS: &str = "q quit  ↑/↓ scroll";

/// Renders the main dashboard view.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_records(frame, body, app);
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::bordered());
    frame.render_widget(heading, area);
}

fn render_records(frame: &mut Frame, area: Rect, app: &App) {
    let offset = u16::try_from(app.scroll()).unwrap_or(u16::MAX);
    let list = Paragraph::new(row_lines(app.panel().records())).scroll((offset, 0));
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.panel().state();
    let status_style = match state {
        PanelState::Empty => Style::default().fg(Color::Yellow),
        PanelState::Loaded(_) => Style::default().fg(Color::Green),
        PanelState::Failed(_) => Style::default().fg(Color::Red),
    };
    let footer = Line::from(vec![
        Span::raw(app.panel().endpoint().to_string()),
        Span::raw(" | "),
        Span::styled(state.summary(), status_style),
        Span::raw(" | "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}
