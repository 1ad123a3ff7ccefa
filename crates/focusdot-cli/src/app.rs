//! Application state.
//!
//! Owns the timer engine plus the window-side state the engine does not
//! know about: theme, the duration-editor popover, quit flag. Every user
//! intent and every tick funnels through here, and each call hands back
//! the cues the engine queued so the caller can execute them.

use focusdot_core::{Cue, TimerEngine, MIN_MINUTES};

use crate::event::Action;

/// Which duration the editor popover is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Session,
    Break,
}

/// In-progress duration edit.
#[derive(Debug, Clone)]
pub struct DurationInput {
    pub field: DurationField,
    pub buffer: String,
}

pub struct App {
    pub engine: TimerEngine,
    pub dark_mode: bool,
    pub editing: Option<DurationInput>,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: TimerEngine, dark_mode: bool) -> Self {
        Self {
            engine,
            dark_mode,
            editing: None,
            should_quit: false,
        }
    }

    /// Deliver one elapsed second to the engine.
    pub fn on_tick(&mut self) -> Vec<Cue> {
        self.engine.tick();
        self.engine.take_cues()
    }

    /// Apply a user intent and return any cues to execute.
    pub fn handle_action(&mut self, action: Action) -> Vec<Cue> {
        if self.editing.is_some() {
            self.handle_editor_action(action);
        } else {
            self.handle_timer_action(action);
        }
        self.engine.take_cues()
    }

    fn handle_timer_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleRun => {
                if self.engine.is_running() {
                    self.engine.stop();
                } else {
                    self.engine.start();
                }
            }
            Action::Reset => {
                self.engine.reset();
            }
            Action::ToggleTheme => self.dark_mode = !self.dark_mode,
            // Duration inputs are disabled while the timer runs.
            Action::EditSession if !self.engine.is_running() => {
                self.open_editor(DurationField::Session);
            }
            Action::EditBreak if !self.engine.is_running() => {
                self.open_editor(DurationField::Break);
            }
            _ => {}
        }
    }

    fn handle_editor_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Back => self.editing = None,
            Action::Enter => self.commit_editor(),
            Action::Char(c) => {
                if c.is_ascii_digit() || c == '.' {
                    if let Some(input) = &mut self.editing {
                        input.buffer.push(c);
                    }
                }
            }
            Action::Backspace => {
                if let Some(input) = &mut self.editing {
                    input.buffer.pop();
                }
            }
            _ => {}
        }
    }

    fn open_editor(&mut self, field: DurationField) {
        let secs = match field {
            DurationField::Session => self.engine.durations().session_secs,
            DurationField::Break => self.engine.durations().break_secs,
        };
        self.editing = Some(DurationInput {
            field,
            buffer: format_minutes(secs),
        });
    }

    fn commit_editor(&mut self) {
        let Some(input) = self.editing.take() else {
            return;
        };
        // Unparseable input falls back to the floor, never an error.
        let minutes = input.buffer.trim().parse::<f64>().unwrap_or(MIN_MINUTES);
        match input.field {
            DurationField::Session => self.engine.set_session_minutes(minutes),
            DurationField::Break => self.engine.set_break_minutes(minutes),
        };
    }
}

/// Render a second count as a minute value for the editor prefill.
/// Whole minutes drop the fraction ("25", not "25.0").
pub fn format_minutes(secs: u64) -> String {
    if secs % 60 == 0 {
        (secs / 60).to_string()
    } else {
        format!("{}", secs as f64 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focusdot_core::{Durations, Phase};

    fn app() -> App {
        App::new(TimerEngine::new(Durations::default()), false)
    }

    #[test]
    fn toggle_run_starts_and_stops() {
        let mut app = app();
        let cues = app.handle_action(Action::ToggleRun);
        assert!(app.engine.is_running());
        assert_eq!(cues, vec![Cue::Ack]);

        let cues = app.handle_action(Action::ToggleRun);
        assert!(!app.engine.is_running());
        assert_eq!(cues, vec![Cue::Ack]);
    }

    #[test]
    fn reset_emits_no_cue() {
        let mut app = app();
        app.handle_action(Action::ToggleRun);
        let cues = app.handle_action(Action::Reset);
        assert!(cues.is_empty());
        assert!(!app.engine.is_running());
    }

    #[test]
    fn theme_toggles() {
        let mut app = app();
        assert!(!app.dark_mode);
        app.handle_action(Action::ToggleTheme);
        assert!(app.dark_mode);
        app.handle_action(Action::ToggleTheme);
        assert!(!app.dark_mode);
    }

    #[test]
    fn editor_opens_prefilled_and_commits() {
        let mut app = app();
        app.handle_action(Action::EditSession);
        let input = app.editing.as_ref().expect("editor open");
        assert_eq!(input.field, DurationField::Session);
        assert_eq!(input.buffer, "25");

        // Replace "25" with "2".
        app.handle_action(Action::Backspace);
        app.handle_action(Action::Backspace);
        app.handle_action(Action::Char('2'));
        app.handle_action(Action::Enter);

        assert!(app.editing.is_none());
        assert_eq!(app.engine.durations().session_secs, 120);
        assert_eq!(app.engine.remaining_secs(), 120);
    }

    #[test]
    fn editor_rejects_non_numeric_chars() {
        let mut app = app();
        app.handle_action(Action::EditBreak);
        app.handle_action(Action::Char('x'));
        assert_eq!(app.editing.as_ref().unwrap().buffer, "5");
    }

    #[test]
    fn empty_editor_input_commits_the_floor() {
        let mut app = app();
        app.handle_action(Action::EditBreak);
        app.handle_action(Action::Backspace); // clear "5"
        app.handle_action(Action::Enter);
        assert_eq!(app.engine.durations().break_secs, 30);
    }

    #[test]
    fn editor_cancel_keeps_old_duration() {
        let mut app = app();
        app.handle_action(Action::EditSession);
        app.handle_action(Action::Char('9'));
        app.handle_action(Action::Back);
        assert!(app.editing.is_none());
        assert_eq!(app.engine.durations().session_secs, 25 * 60);
    }

    #[test]
    fn editing_disabled_while_running() {
        let mut app = app();
        app.handle_action(Action::ToggleRun);
        app.handle_action(Action::EditSession);
        assert!(app.editing.is_none());
        app.handle_action(Action::EditBreak);
        assert!(app.editing.is_none());
    }

    #[test]
    fn tick_flows_through_to_the_engine() {
        let mut app = App::new(
            TimerEngine::new(Durations {
                session_secs: 2,
                break_secs: 2,
                sessions_per_cycle: 4,
            }),
            false,
        );
        app.handle_action(Action::ToggleRun);
        assert!(app.on_tick().is_empty());
        let cues = app.on_tick();
        assert_eq!(cues, vec![Cue::Completion]);
        assert_eq!(app.engine.phase(), Phase::Break);
    }

    #[test]
    fn format_minutes_drops_whole_fractions() {
        assert_eq!(format_minutes(1500), "25");
        assert_eq!(format_minutes(30), "0.5");
        assert_eq!(format_minutes(90), "1.5");
    }
}
