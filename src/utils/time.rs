//! Time utilities: minute rounding, duration formatting, clock rendering.

use chrono::{DateTime, Local};

/// Round a millisecond duration to whole minutes, half away from zero.
/// Applied exactly once per stored total, at finalization.
pub fn round_minutes(ms: i64) -> i64 {
    if ms >= 0 {
        (ms + 30_000) / 60_000
    } else {
        -((-ms + 30_000) / 60_000)
    }
}

/// Render a millisecond duration as HH:MM:SS. Negative inputs (possible in
/// live projections under clock skew) are floored at zero here, at the
/// formatting boundary only.
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Render a timestamp's wall-clock time as HH:MM.
pub fn format_clock(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}
