//! Schedule normalization engine.
//!
//! Raw activity records go through four pure stages:
//! classify -> travel synthesis -> free-time synthesis -> grouping.
//! No stage performs I/O and none can fail; odd input degrades to defaults.

pub mod classify;
pub mod free_time;
pub mod group;
pub mod keywords;
pub mod travel;

use crate::config::{Config, FreeTimeMinutes};
use crate::models::entry::EnrichedEntry;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use keywords::KeywordSet;

/// Compiled, immutable view of the engine-related configuration.
#[derive(Debug, Clone)]
pub struct Rules {
    pub default_time: NaiveTime,
    pub breakfast: KeywordSet,
    pub lunch: KeywordSet,
    pub dinner: KeywordSet,
    pub free_time: KeywordSet,
    pub departure: KeywordSet,
    pub skip_departure_days: bool,
    pub free_time_label: String,
    pub free_time_offset_minutes: u32,
    pub free_time_ceiling_hour: u32,
    pub free_time_minutes: FreeTimeMinutes,
    pub travel_label: String,
}

impl Rules {
    pub fn from_config(cfg: &Config) -> Self {
        let fallback = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            default_time: parse_time(&cfg.default_time).unwrap_or(fallback),
            breakfast: KeywordSet::new(&cfg.breakfast_keywords),
            lunch: KeywordSet::new(&cfg.lunch_keywords),
            dinner: KeywordSet::new(&cfg.dinner_keywords),
            free_time: KeywordSet::new(&cfg.free_time_keywords),
            departure: KeywordSet::new(&cfg.departure_keywords),
            skip_departure_days: cfg.skip_departure_days,
            free_time_label: cfg.free_time_label.clone(),
            free_time_offset_minutes: cfg.free_time_offset_minutes,
            free_time_ceiling_hour: cfg.free_time_ceiling_hour.min(23),
            free_time_minutes: cfg.free_time_minutes,
            travel_label: cfg.travel_label.clone(),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::from_config(&Config::default())
    }
}

/// Stable sort by (region, date, time). Entries with equal keys keep their
/// input order.
pub fn sort_by_day(entries: &mut [EnrichedEntry]) {
    entries.sort_by(|a, b| {
        a.region
            .cmp(&b.region)
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.time.cmp(&b.time))
    });
}

/// Same region and same date.
pub(crate) fn same_day(a: &EnrichedEntry, b: &EnrichedEntry) -> bool {
    a.region == b.region && a.date == b.date
}
