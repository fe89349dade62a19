//! Epoch-second detection and timestamp formatting
//!
//! Payload fields carry no schema, so a number is treated as a Unix timestamp
//! purely by magnitude: anything strictly between 1,000,000,000 and
//! 10,000,000,000 (2001-09-09 to 2286-11-20) is annotated.

mod clock;
mod relative;

pub use clock::{Clock, FixedClock, SystemClock};
pub use relative::{RelativeTime, Span};

use chrono::{DateTime, TimeDelta, Utc};

/// Lower bound (exclusive) of the epoch-seconds window
pub const TIMESTAMP_WINDOW_MIN: f64 = 1_000_000_000.0;

/// Upper bound (exclusive) of the epoch-seconds window
pub const TIMESTAMP_WINDOW_MAX: f64 = 10_000_000_000.0;

/// Whether a number plausibly holds epoch seconds
pub fn is_plausible_timestamp(value: f64) -> bool {
    value > TIMESTAMP_WINDOW_MIN && value < TIMESTAMP_WINDOW_MAX
}

/// Interpret `seconds` as Unix epoch seconds, keeping the fraction
///
/// The fractional part is truncated to whole nanoseconds.
pub fn epoch_to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }

    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1_000_000_000.0) as i64;

    DateTime::<Utc>::from_timestamp(whole as i64, 0)?
        .checked_add_signed(TimeDelta::nanoseconds(nanos))
}

/// RFC 3339 in UTC with a `Z` suffix
///
/// Fractional seconds are printed only when non-zero, with trailing zeros
/// trimmed.
pub fn format_iso(time: &DateTime<Utc>) -> String {
    let mut out = time.format("%Y-%m-%dT%H:%M:%S").to_string();

    let nanos = time.timestamp_subsec_nanos();
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out.push('Z');
    out
}
