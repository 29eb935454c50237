// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_last_day, parse_date};
use chrono::NaiveDate;

/// Inclusive date interval selected by `--range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Agenda dates are plain strings; unparsable ones never match.
    pub fn contains(&self, date: &str) -> bool {
        parse_date(date).is_some_and(|d| self.start <= d && d <= self.end)
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("'{r}': {why}"))
}

/// Bounds of a single period: YYYY, YYYY-MM or YYYY-MM-DD.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let y: i32 = p.get(0..4)?.parse().ok()?;
            let m: u32 = p.get(5..7)?.parse().ok()?;
            Some((NaiveDate::from_ymd_opt(y, m, 1)?, month_last_day(y, m)?))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse --range.
///
/// Accepts:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have same format"));
        }

        let (s, _) = period_bounds(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, e) = period_bounds(end).ok_or_else(|| invalid(r, "invalid end"))?;
        if s > e {
            return Err(invalid(r, "start is after end"));
        }
        return Ok(DateRange { start: s, end: e });
    }

    let (start, end) = period_bounds(r).ok_or_else(|| invalid(r, "expected YYYY, YYYY-MM or YYYY-MM-DD"))?;
    Ok(DateRange { start, end })
}
