//! Compact remaining-time strings for the expiry countdown.

use chrono::TimeDelta;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Greedy decomposition into whole days, remainder hours, remainder minutes.
/// Division truncates toward zero, so negative durations yield negative parts.
fn split_days_hours_minutes(remaining: TimeDelta) -> (i64, i64, i64) {
    let mut secs = remaining.num_seconds();
    let days = secs / SECS_PER_DAY;
    secs -= days * SECS_PER_DAY;
    let hours = secs / SECS_PER_HOUR;
    secs -= hours * SECS_PER_HOUR;
    let minutes = secs / SECS_PER_MINUTE;
    (days, hours, minutes)
}

/// Summarize a signed duration with its largest one or two applicable units.
///
/// Selection is first-match: more than one whole day renders `"{days}d {hours}h"`,
/// more than one whole hour renders `"{hours}h"`, everything else renders the
/// remainder minutes (which may be zero or negative; no clamping).
///
/// The unit conditions are strictly greater-than-one, so a duration between
/// one and two of a unit skips that unit: 1d 5h renders `"5h"` and 1h 59m
/// renders `"59m"`. That hole is long-observed behavior and is kept as is.
pub fn remaining_time_string(remaining: TimeDelta) -> String {
    // TODO: confirm with product that the strict > 1 unit thresholds are
    // intended; durations between 1 and 2 days (or hours) skip their unit.
    let (days, hours, minutes) = split_days_hours_minutes(remaining);

    if days > 1 {
        return format!("{days}d {hours}h");
    }
    if hours > 1 {
        return format!("{hours}h");
    }
    format!("{minutes}m")
}
