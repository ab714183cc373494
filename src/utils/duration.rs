//! Duration formatting for display projections

/// Format a number of minutes as `HH:MM`
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a number of seconds as `MM:SS`
///
/// Minutes are not wrapped into hours, so a full hour reads `60:00`.
pub fn seconds_to_duration(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
