use serde::{Deserialize, Serialize};

/// Floor for user-supplied durations, in minutes.
///
/// Invalid input (non-positive, NaN, unparseable) is coerced to this
/// value rather than rejected; the user never sees an input error.
pub const MIN_MINUTES: f64 = 0.5;

/// Session/break duration configuration, stored as whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Session (focus) phase length in seconds.
    pub session_secs: u64,
    /// Break phase length in seconds.
    pub break_secs: u64,
    /// Number of completed sessions that make up one dot cycle.
    pub sessions_per_cycle: u32,
}

impl Durations {
    /// Build from minute values, sanitizing each through [`Durations::sanitize_minutes`].
    pub fn from_minutes(session_min: f64, break_min: f64) -> Self {
        Self {
            session_secs: Self::sanitize_minutes(session_min),
            break_secs: Self::sanitize_minutes(break_min),
            sessions_per_cycle: 4,
        }
    }

    /// Convert a minute value to whole seconds, enforcing the floor.
    ///
    /// Non-finite and non-positive values become [`MIN_MINUTES`]. Positive
    /// values pass through and are rounded to the nearest second.
    pub fn sanitize_minutes(minutes: f64) -> u64 {
        let minutes = if minutes.is_finite() && minutes > 0.0 {
            minutes
        } else {
            MIN_MINUTES
        };
        (minutes * 60.0).round() as u64
    }

    /// Parse a user-typed minute string, coercing parse failures to the floor.
    pub fn parse_minutes(input: &str) -> u64 {
        let minutes = input.trim().parse::<f64>().unwrap_or(MIN_MINUTES);
        Self::sanitize_minutes(minutes)
    }
}

impl Default for Durations {
    /// 25-minute sessions, 5-minute breaks, 4 sessions per cycle.
    fn default() -> Self {
        Self {
            session_secs: 25 * 60,
            break_secs: 5 * 60,
            sessions_per_cycle: 4,
        }
    }
}
