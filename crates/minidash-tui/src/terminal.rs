//! Terminal setup and the main event loop.

use std::io;
use std::time::Duration;

use ratatui::DefaultTerminal;

use crate::app::App;
use crate::event::next_event;
use crate::ui;

/// Takes over the terminal and runs the dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialised, drawn to, or read.
pub fn run(app: &mut App, tick_rate: Duration) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, app, tick_rate);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;
        let event = next_event(tick_rate)?;
        app.handle_event(&event);
    }
    tracing::debug!("dashboard closed");
    Ok(())
}
