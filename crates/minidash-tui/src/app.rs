//! TUI application state.
//!
//! Owns the mounted panel and the list scroll position, and applies
//! terminal events to them.

use crate::event::{Action, TerminalEvent};
use crate::panel::Panel;

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    panel: Panel,
    scroll: usize,
}

impl App {
    /// Creates the application around an already-mounted panel.
    #[must_use]
    pub fn new(panel: Panel) -> Self {
        Self {
            running: true,
            panel,
            scroll: 0,
        }
    }

    /// The metrics panel.
    #[must_use]
    pub const fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Index of the first visible row.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Applies one terminal event.
    pub fn handle_event(&mut self, event: &TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => self.apply(Action::from_key(*key)),
            TerminalEvent::Resize(width, height) => {
                tracing::trace!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
        if self.panel.poll() {
            self.scroll = 0;
        }
    }

    /// Applies an action to the app state.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => {
                let last = self.panel.records().len().saturating_sub(1);
                self.scroll = (self.scroll + 1).min(last);
            }
            Action::ScrollTop => self.scroll = 0,
            Action::Ignore => {}
        }
    }
}
