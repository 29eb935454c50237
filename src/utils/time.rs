//! Time utilities: parsing and formatting HH:MM.

use chrono::{NaiveTime, Timelike};

/// "HH:MM", or "HH:MM:SS" with the seconds dropped.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
        .and_then(|parsed| parsed.with_second(0))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// `t` as a clock time, or `fallback` when `t` is empty or malformed.
/// The boolean reports whether the fallback was used.
pub fn normalize_time(t: &str, fallback: NaiveTime) -> (NaiveTime, bool) {
    match parse_time(t) {
        Some(parsed) => (parsed, false),
        None => (fallback, true),
    }
}

/// Split "HH:MM" into numbers without validating ranges.
/// Used on already-normalized strings, so anything odd is simply `None`.
pub fn hour_minute(t: &str) -> Option<(u32, u32)> {
    let (h, m) = t.trim().split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}
