mod durations;
mod engine;

pub use durations::{Durations, MIN_MINUTES};
pub use engine::{Phase, TimerEngine};
