//! Creation and update timestamps.
//!
//! Timestamps are UTC with microsecond precision. Their text form is RFC 3339
//! with exactly six fractional digits and a `Z` suffix, so stored values sort
//! lexically in time order and survive a round trip unchanged.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Value of `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// The current time, truncated to microseconds.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width text form of a timestamp.
#[must_use]
pub fn to_text(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse any RFC 3339 timestamp back into UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `raw` is not RFC 3339.
pub fn from_text(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.to_utc())
}
