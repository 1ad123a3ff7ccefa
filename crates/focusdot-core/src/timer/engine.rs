//! Timer engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads or timers - the host is responsible for calling `tick()` once
//! per elapsed second while it considers the timer running.
//!
//! ## Phase cycle
//!
//! ```text
//! Session -> Break -> Session -> ...
//! ```
//!
//! Completing a session advances the progress-dot index; completing a
//! break does not. Every transition leaves the engine stopped so the
//! user explicitly starts the next phase.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Durations::default());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event) when a phase completes
//! for cue in engine.take_cues() { /* play it */ }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::durations::Durations;
use crate::events::{Cue, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Session,
    Break,
}

/// Core timer engine.
///
/// Owns all temporal state; mutated only through the operations below.
/// Side effects are queued as [`Cue`] tokens for the host to drain.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: Durations,
    phase: Phase,
    remaining_secs: u64,
    running: bool,
    completed_sessions: u32,
    dot_index: u32,
    cues: Vec<Cue>,
}

impl TimerEngine {
    /// Create a new engine: Session phase, full countdown, stopped.
    pub fn new(durations: Durations) -> Self {
        Self {
            remaining_secs: durations.session_secs,
            durations,
            phase: Phase::Session,
            running: false,
            completed_sessions: 0,
            dot_index: 0,
            cues: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn dot_index(&self) -> u32 {
        self.dot_index
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Full length of the current phase in seconds.
    pub fn total_secs(&self) -> u64 {
        match self.phase {
            Phase::Session => self.durations.session_secs,
            Phase::Break => self.durations.break_secs,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            running: self.running,
            completed_sessions: self.completed_sessions,
            dot_index: self.dot_index,
            sessions_per_cycle: self.durations.sessions_per_cycle,
            at: Utc::now(),
        }
    }

    /// Drain pending side-effect cues. The host executes and discards them.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin counting down. No-op if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        self.cues.push(Cue::Ack);
        Some(Event::TimerStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Halt the countdown. Subsequent ticks are ignored. No-op if stopped.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.cues.push(Cue::Ack);
        Some(Event::TimerStopped {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Return to the canonical initial state, unconditionally.
    ///
    /// The phase is forced back to Session even mid-break. Emits no cue,
    /// which distinguishes a reset from a phase-complete transition.
    pub fn reset(&mut self) -> Option<Event> {
        self.phase = Phase::Session;
        self.remaining_secs = self.durations.session_secs;
        self.running = false;
        self.completed_sessions = 0;
        self.dot_index = 0;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Store a new session length and restart the cycle from scratch.
    ///
    /// Rejected while running (the host disables the input as well).
    pub fn set_session_minutes(&mut self, minutes: f64) -> Option<Event> {
        if self.running {
            return None;
        }
        self.durations.session_secs = Durations::sanitize_minutes(minutes);
        self.reset();
        Some(Event::SessionDurationChanged {
            session_secs: self.durations.session_secs,
            at: Utc::now(),
        })
    }

    /// Store a new break length without disturbing the cycle.
    ///
    /// `completed_sessions` and `dot_index` are untouched. If the engine
    /// is currently in the Break phase the countdown is re-baselined to
    /// the new duration; otherwise it takes effect at the next transition.
    /// Rejected while running.
    pub fn set_break_minutes(&mut self, minutes: f64) -> Option<Event> {
        if self.running {
            return None;
        }
        self.durations.break_secs = Durations::sanitize_minutes(minutes);
        if self.phase == Phase::Break {
            self.remaining_secs = self.durations.break_secs;
        }
        Some(Event::BreakDurationChanged {
            break_secs: self.durations.break_secs,
            at: Utc::now(),
        })
    }

    /// Advance time by exactly one second.
    ///
    /// Ignored unless running. The decrement and the phase-completion
    /// check happen in the same call, so the host never observes a zero
    /// countdown without the transition having already run.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.complete_phase());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Phase-completion transition, invoked only from `tick()` at zero.
    fn complete_phase(&mut self) -> Event {
        self.running = false;
        match self.phase {
            Phase::Session => {
                self.completed_sessions += 1;
                self.advance_dot();
                self.phase = Phase::Break;
                self.remaining_secs = self.durations.break_secs;
                self.cues.push(Cue::Completion);
                Event::SessionCompleted {
                    completed_sessions: self.completed_sessions,
                    dot_index: self.dot_index,
                    at: Utc::now(),
                }
            }
            Phase::Break => {
                self.phase = Phase::Session;
                self.remaining_secs = self.durations.session_secs;
                self.cues.push(Cue::Ack);
                Event::BreakCompleted {
                    completed_sessions: self.completed_sessions,
                    at: Utc::now(),
                }
            }
        }
    }

    /// Dot rule: back to zero when a full cycle just completed, otherwise
    /// a relative increment from wherever the dot was.
    fn advance_dot(&mut self) {
        if self.completed_sessions % self.durations.sessions_per_cycle == 0 {
            self.dot_index = 0;
        } else {
            self.dot_index += 1;
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_engine(session_secs: u64, break_secs: u64) -> TimerEngine {
        TimerEngine::new(Durations {
            session_secs,
            break_secs,
            sessions_per_cycle: 4,
        })
    }

    /// Run a phase to completion: start, then tick until the transition fires.
    fn run_phase(engine: &mut TimerEngine) -> Event {
        engine.start();
        loop {
            if let Some(event) = engine.tick() {
                return event;
            }
        }
    }

    #[test]
    fn initial_state() {
        let engine = TimerEngine::default();
        assert_eq!(engine.phase(), Phase::Session);
        assert_eq!(engine.remaining_secs(), 25 * 60);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_sessions(), 0);
        assert_eq!(engine.dot_index(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut engine = TimerEngine::default();
        assert!(engine.start().is_some());
        assert!(engine.start().is_none());
        assert!(engine.is_running());
        // Only the first start queued a cue.
        assert_eq!(engine.take_cues(), vec![Cue::Ack]);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut engine = TimerEngine::default();
        assert!(engine.stop().is_none());
        engine.start();
        assert!(engine.stop().is_some());
        assert!(engine.stop().is_none());
        assert!(!engine.is_running());
    }

    #[test]
    fn tick_while_stopped_changes_nothing() {
        let mut engine = short_engine(5, 3);
        for _ in 0..10 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.remaining_secs(), 5);
        assert_eq!(engine.phase(), Phase::Session);
        assert_eq!(engine.completed_sessions(), 0);
        assert!(engine.take_cues().is_empty());
    }

    #[test]
    fn session_runs_down_and_transitions_to_break() {
        let mut engine = short_engine(5, 3);
        engine.start();
        engine.take_cues(); // discard the start ack

        for expected in [4, 3, 2, 1] {
            assert!(engine.tick().is_none());
            assert_eq!(engine.remaining_secs(), expected);
        }
        let event = engine.tick().expect("5th tick completes the session");
        match event {
            Event::SessionCompleted {
                completed_sessions,
                dot_index,
                ..
            } => {
                assert_eq!(completed_sessions, 1);
                assert_eq!(dot_index, 1);
            }
            other => panic!("expected SessionCompleted, got {other:?}"),
        }
        assert_eq!(engine.phase(), Phase::Break);
        assert_eq!(engine.remaining_secs(), 3);
        assert!(!engine.is_running());
        assert_eq!(engine.take_cues(), vec![Cue::Completion]);
    }

    #[test]
    fn break_completion_returns_to_session_without_touching_dot() {
        let mut engine = short_engine(2, 2);
        run_phase(&mut engine); // session 1 done
        let dot_after_session = engine.dot_index();

        let event = run_phase(&mut engine); // break done
        assert!(matches!(event, Event::BreakCompleted { .. }));
        assert_eq!(engine.phase(), Phase::Session);
        assert_eq!(engine.remaining_secs(), 2);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_sessions(), 1);
        assert_eq!(engine.dot_index(), dot_after_session);
        // Break completion cues the soft ack, not the completion sound.
        assert!(engine.take_cues().contains(&Cue::Ack));
    }

    #[test]
    fn dot_index_wraps_after_full_cycle() {
        let mut engine = short_engine(1, 1);
        let mut seen = Vec::new();
        for _ in 0..4 {
            run_phase(&mut engine); // session
            seen.push(engine.dot_index());
            run_phase(&mut engine); // break
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
        assert_eq!(engine.completed_sessions(), 4);
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let mut engine = short_engine(2, 5);
        run_phase(&mut engine); // now mid-cycle, in Break
        engine.start();
        engine.tick();
        engine.take_cues();

        assert!(engine.reset().is_some());
        assert_eq!(engine.phase(), Phase::Session);
        assert_eq!(engine.remaining_secs(), 2);
        assert!(!engine.is_running());
        assert_eq!(engine.completed_sessions(), 0);
        assert_eq!(engine.dot_index(), 0);
        // Reset never cues a sound.
        assert!(engine.take_cues().is_empty());
    }

    #[test]
    fn set_session_minutes_stores_and_resets() {
        let mut engine = short_engine(10, 3);
        run_phase(&mut engine);
        assert_eq!(engine.completed_sessions(), 1);

        let event = engine.set_session_minutes(2.0).unwrap();
        assert!(matches!(
            event,
            Event::SessionDurationChanged {
                session_secs: 120,
                ..
            }
        ));
        assert_eq!(engine.durations().session_secs, 120);
        assert_eq!(engine.phase(), Phase::Session);
        assert_eq!(engine.remaining_secs(), 120);
        assert_eq!(engine.completed_sessions(), 0);
        assert_eq!(engine.dot_index(), 0);
    }

    #[test]
    fn set_session_minutes_rejected_while_running() {
        let mut engine = TimerEngine::default();
        engine.start();
        assert!(engine.set_session_minutes(10.0).is_none());
        assert_eq!(engine.durations().session_secs, 25 * 60);
    }

    #[test]
    fn set_break_minutes_preserves_cycle_counters() {
        let mut engine = short_engine(1, 10);
        run_phase(&mut engine); // in Break now, counters advanced
        assert_eq!(engine.completed_sessions(), 1);
        assert_eq!(engine.dot_index(), 1);

        engine.set_break_minutes(2.0).unwrap();
        assert_eq!(engine.durations().break_secs, 120);
        // Countdown re-baselined because we are mid-break...
        assert_eq!(engine.remaining_secs(), 120);
        // ...but the cycle is undisturbed.
        assert_eq!(engine.completed_sessions(), 1);
        assert_eq!(engine.dot_index(), 1);
        assert_eq!(engine.phase(), Phase::Break);
    }

    #[test]
    fn set_break_minutes_in_session_phase_leaves_countdown_alone() {
        let mut engine = short_engine(60, 30);
        engine.set_break_minutes(1.0).unwrap();
        assert_eq!(engine.durations().break_secs, 60);
        assert_eq!(engine.remaining_secs(), 60); // session countdown untouched
        assert_eq!(engine.phase(), Phase::Session);
    }

    #[test]
    fn invalid_duration_input_coerces_to_floor() {
        let mut engine = TimerEngine::default();
        engine.set_session_minutes(-5.0);
        assert_eq!(engine.durations().session_secs, 30);
        engine.set_break_minutes(f64::NAN);
        assert_eq!(engine.durations().break_secs, 30);
    }

    #[test]
    fn remaining_never_goes_negative() {
        let mut engine = short_engine(1, 1);
        engine.start();
        engine.tick(); // completes, stops
        // Even if the host keeps ticking, nothing moves below zero.
        engine.start();
        for _ in 0..5 {
            engine.tick();
            assert!(engine.remaining_secs() <= 1);
        }
    }

    #[test]
    fn snapshot_reflects_state() {
        let engine = short_engine(90, 30);
        match engine.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_secs,
                total_secs,
                running,
                sessions_per_cycle,
                ..
            } => {
                assert_eq!(phase, Phase::Session);
                assert_eq!(remaining_secs, 90);
                assert_eq!(total_secs, 90);
                assert!(!running);
                assert_eq!(sessions_per_cycle, 4);
            }
            other => panic!("expected StateSnapshot, got {other:?}"),
        }
    }
}
