use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// "2025-08-06" -> "2025-08-06 (Wed)"; unparsable dates are returned as is.
pub fn with_weekday(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format!("{} ({})", s, d.weekday()),
        None => s.to_string(),
    }
}

pub fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// 1-based day index of `date` within a trip starting on `first`.
pub fn trip_day(first: &str, date: &str) -> Option<i64> {
    let (a, b) = (parse_date(first)?, parse_date(date)?);
    Some((b - a).num_days() + 1)
}
