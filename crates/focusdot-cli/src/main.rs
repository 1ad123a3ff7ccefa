//! Focusdot terminal UI.
//!
//! Presents the session/break countdown, owns the one-second tick cadence,
//! and executes the engine's sound cues as desktop notifications.

mod app;
mod cues;
mod error;
mod event;
mod ui;

use std::time::{Duration, Instant};

use clap::Parser;

use focusdot_core::{Durations, TimerEngine};

use crate::app::App;
use crate::error::AppError;
use crate::event::{Action, EventHandler};

#[derive(Parser)]
#[command(name = "focusdot", version, about = "A session/break focus timer for the terminal")]
struct Cli {
    /// Session ("flow") length in minutes
    #[arg(long = "session", value_name = "MINUTES")]
    session: Option<String>,

    /// Break length in minutes
    #[arg(long = "break", value_name = "MINUTES")]
    break_minutes: Option<String>,

    /// Start in the dark theme
    #[arg(long)]
    dark: bool,
}

impl Cli {
    /// Build the engine durations from the flags.
    ///
    /// Values go through the engine's sanitizer, so a typo degrades to
    /// the floor duration instead of an argument error.
    fn durations(&self) -> Durations {
        let mut durations = Durations::default();
        if let Some(minutes) = &self.session {
            durations.session_secs = Durations::parse_minutes(minutes);
        }
        if let Some(minutes) = &self.break_minutes {
            durations.break_secs = Durations::parse_minutes(minutes);
        }
        durations
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut app = App::new(TimerEngine::new(cli.durations()), cli.dark);

    let terminal = ratatui::init();
    let result = run_app(terminal, &mut app);
    ratatui::restore();
    result?;

    // Final state on stdout for scripting.
    println!("{}", serde_json::to_string_pretty(&app.engine.snapshot())?);
    Ok(())
}

/// Main loop: draw, poll keys until the next tick deadline, tick.
fn run_app(mut terminal: ratatui::DefaultTerminal, app: &mut App) -> Result<(), AppError> {
    let events = EventHandler::new();
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(action) = events.next(timeout, app.editing.is_some())? {
            let cues = app.handle_action(action);
            cues::execute_all(&cues);
            if app.should_quit {
                break;
            }
            // Resetting or editing re-anchors the cadence so the first
            // second of a fresh countdown is a full second.
            if matches!(action, Action::Reset | Action::Enter) {
                last_tick = Instant::now();
            }
        }

        // At most one tick per elapsed second; the engine ignores ticks
        // while stopped.
        if last_tick.elapsed() >= tick_rate {
            let cues = app.on_tick();
            cues::execute_all(&cues);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
