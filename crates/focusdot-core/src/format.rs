//! Countdown display formatting.

/// Render a second count as `MM:SS`, both fields zero-padded.
///
/// Minutes widen past two digits rather than truncate, so very long
/// sessions still render unambiguously.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
