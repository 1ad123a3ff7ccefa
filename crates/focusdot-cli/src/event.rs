//! Keyboard event handling.
//!
//! Polls crossterm with a deadline supplied by the main loop so the
//! one-second tick cadence is never starved by input handling.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User intents the timer window understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start the countdown if stopped, stop it if running
    ToggleRun,
    /// Reset the whole cycle
    Reset,
    /// Switch between the light and dark theme
    ToggleTheme,
    /// Open the session ("flow") duration editor
    EditSession,
    /// Open the break duration editor
    EditBreak,
    /// Commit the duration editor
    Enter,
    /// Dismiss the duration editor
    Back,
    /// Character typed into the duration editor
    Char(char),
    /// Backspace in the duration editor
    Backspace,
}

/// Converts terminal events into [`Action`]s.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Poll for the next key event, waiting at most `timeout`.
    ///
    /// Returns Ok(None) when no key arrives before the deadline.
    pub fn next(&self, timeout: Duration, editing: bool) -> io::Result<Option<Action>> {
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    let action = if editing {
                        self.key_to_input_action(key_event)
                    } else {
                        self.key_to_action(key_event)
                    };
                    return Ok(action);
                }
            }
        }
        Ok(None)
    }

    /// Key mapping for the main timer view.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::ToggleRun),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('f') => Some(Action::EditSession),
            KeyCode::Char('b') => Some(Action::EditBreak),
            _ => None,
        }
    }

    /// Key mapping while the duration editor is open.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
