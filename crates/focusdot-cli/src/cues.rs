//! Cue execution.
//!
//! The engine only requests sounds; this module performs them, as a
//! desktop notification carrying a freedesktop sound name.

use focusdot_core::Cue;
use notify_rust::Notification;

/// Fire the notification for a single cue.
pub fn execute(cue: Cue) -> Result<(), notify_rust::error::Error> {
    let (body, sound) = match cue {
        Cue::Ack => ("Timer updated", "message-new-instant"),
        Cue::Completion => ("Session complete - time for a break", "complete"),
    };

    Notification::new()
        .summary("Focusdot")
        .body(body)
        .sound_name(sound)
        .show()?;
    Ok(())
}

/// Execute a batch of drained cues.
///
/// Failures are swallowed: a missing notification daemon must not take
/// the timer down with it.
pub fn execute_all(cues: &[Cue]) {
    for cue in cues {
        let _ = execute(*cue);
    }
}
