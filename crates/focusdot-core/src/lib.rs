//! # Focusdot Core Library
//!
//! This library provides the timer engine behind the Focusdot focus timer.
//! It is deliberately I/O-free: the engine is a state machine that requires
//! the host to deliver one-second ticks and user intents, and it answers
//! with state snapshots and side-effect cues the host executes (playing a
//! sound, firing a notification).
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: tick-driven Session/Break state machine
//! - [`Durations`]: sanitized session/break duration configuration
//! - [`Event`]: timestamped record of every state change
//! - [`Cue`]: side-effect tokens the host drains and performs

pub mod events;
pub mod format;
pub mod timer;

pub use events::{Cue, Event};
pub use format::format_mmss;
pub use timer::{Durations, Phase, TimerEngine, MIN_MINUTES};
