use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Side-effect token emitted by the engine.
///
/// The engine never performs I/O; it queues these and the host drains
/// them after each operation and performs the actual playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Short acknowledgment sound (start/stop pressed, break finished).
    Ack,
    /// Session-complete sound.
    Completion,
}

/// Every state change in the engine produces an Event.
/// The host renders from these; the final snapshot is dumped as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerStopped {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A session phase ran down to zero.
    SessionCompleted {
        completed_sessions: u32,
        dot_index: u32,
        at: DateTime<Utc>,
    },
    /// A break phase ran down to zero.
    BreakCompleted {
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
    SessionDurationChanged {
        session_secs: u64,
        at: DateTime<Utc>,
    },
    BreakDurationChanged {
        break_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        completed_sessions: u32,
        dot_index: u32,
        sessions_per_cycle: u32,
        at: DateTime<Utc>,
    },
}
