//! Human-readable distance between an instant and "now"

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Magnitude of a time difference, truncated to the largest fitting unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    LessThanMinute,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

/// Distance from "now" to an instant, and whether it lies in the past
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub span: Span,
    pub past: bool,
}

impl RelativeTime {
    /// Compare `then` against `now`
    ///
    /// Thresholds are half-open on the lower bound and every count is
    /// truncated, so 59m59s is "59 minute(s)" and exactly one hour is
    /// "1 hour(s)". A zero difference counts as past.
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = now.signed_duration_since(then);
        let past = diff >= TimeDelta::zero();
        let abs = if past { diff } else { -diff };

        let span = if abs < TimeDelta::minutes(1) {
            Span::LessThanMinute
        } else if abs < TimeDelta::hours(1) {
            Span::Minutes(abs.num_minutes())
        } else if abs < TimeDelta::hours(24) {
            Span::Hours(abs.num_hours())
        } else {
            Span::Days(abs.num_hours() / 24)
        };

        Self { span, past }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = match self.span {
            Span::LessThanMinute if self.past => return f.write_str("less than a minute ago"),
            Span::LessThanMinute => return f.write_str("in less than a minute"),
            Span::Minutes(n) => (n, "minute"),
            Span::Hours(n) => (n, "hour"),
            Span::Days(n) => (n, "day"),
        };

        if self.past {
            write!(f, "{count} {unit}(s) ago")
        } else {
            write!(f, "in {count} {unit}(s)")
        }
    }
}
