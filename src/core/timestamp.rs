//! Timestamp capture and rendering
//!
//! A statement's instant is sampled once, as epoch milliseconds, the moment
//! the stream is invoked; rendering to wall-clock text happens separately so
//! the sampled value stays available for the stream's counters.

use chrono::{Local, LocalResult, TimeZone, Utc};

/// Wall-clock layout carried by every line: `2025-01-08 10:30:45.123`.
const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Rendered in place of the date and time when the sampled instant has no
/// local-time representation. The millisecond suffix is kept.
const TIME_ERROR: &str = "ERROR-TIME";

/// Milliseconds since the Unix epoch, right now.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render an epoch-milliseconds instant in the local time zone.
///
/// Instants chrono cannot map into local time (out of range, or ambiguous
/// around a zone transition) degrade to `ERROR-TIME.mmm` rather than
/// failing the emission.
pub fn format_epoch_millis(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis) {
        LocalResult::Single(datetime) => datetime.format(WALL_CLOCK_FORMAT).to_string(),
        _ => format!("{}.{:03}", TIME_ERROR, millis.rem_euclid(1000)),
    }
}
