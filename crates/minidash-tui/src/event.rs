//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and maps keys to
//! the actions the application understands.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for UI refresh.
    Tick,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the dashboard.
    Quit,
    /// Scroll the record list up one row.
    ScrollUp,
    /// Scroll the record list down one row.
    ScrollDown,
    /// Jump back to the first row.
    ScrollTop,
    /// Key has no binding.
    Ignore,
}

impl Action {
    /// Maps a key press to an action.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            KeyCode::Up | KeyCode::Char('k') => Self::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Self::ScrollDown,
            KeyCode::Home | KeyCode::Char('g') => Self::ScrollTop,
            _ => Self::Ignore,
        }
    }
}

/// Waits up to `tick_rate` for the next terminal event.
///
/// Returns [`TerminalEvent::Tick`] if nothing relevant arrived in time.
///
/// # Errors
///
/// Returns an error if the terminal cannot be polled or read.
pub fn next_event(tick_rate: Duration) -> io::Result<TerminalEvent> {
    if !event::poll(tick_rate)? {
        return Ok(TerminalEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
        Event::Resize(width, height) => TerminalEvent::Resize(width, height),
        _ => TerminalEvent::Tick,
    })
}
