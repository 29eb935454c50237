//! Stage 4: one free-time slot at the end of every day that lacks one.

use super::Rules;
use crate::config::FreeTimeMinutes;
use crate::models::entry::{EnrichedEntry, EntryKind, TimeCategory};
use crate::models::region::Region;
use crate::utils::time::hour_minute;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// (date, region)
pub type DayKey = (String, Region);

/// Group entries per (date, region), keeping their relative order.
pub fn bucket_by_day(entries: Vec<EnrichedEntry>) -> BTreeMap<DayKey, Vec<EnrichedEntry>> {
    let mut buckets: BTreeMap<DayKey, Vec<EnrichedEntry>> = BTreeMap::new();
    for e in entries {
        buckets
            .entry((e.date.clone(), e.region.clone()))
            .or_default()
            .push(e);
    }
    buckets
}

pub fn flatten(buckets: BTreeMap<DayKey, Vec<EnrichedEntry>>) -> Vec<EnrichedEntry> {
    buckets.into_values().flatten().collect()
}

pub fn synthesize_free_time(
    mut buckets: BTreeMap<DayKey, Vec<EnrichedEntry>>,
    rules: &Rules,
) -> BTreeMap<DayKey, Vec<EnrichedEntry>> {
    let mut added = 0;

    for ((date, region), bucket) in buckets.iter_mut() {
        if let Some(reason) = skip_reason(bucket, date, region, rules) {
            trace!(%date, %region, reason, "no free time added");
            continue;
        }

        let anchor = free_time_anchor(bucket, rules);
        bucket.push(free_time_entry(date, region, anchor, rules));
        // a clamped anchor may land before late activities
        bucket.sort_by(|a, b| a.time.cmp(&b.time));
        added += 1;
    }

    debug!(added, days = buckets.len(), "free-time synthesis done");
    buckets
}

fn skip_reason(
    bucket: &[EnrichedEntry],
    date: &str,
    region: &Region,
    rules: &Rules,
) -> Option<&'static str> {
    let id = free_time_id(date, region.as_str());
    if bucket.iter().any(|e| e.is_free_time() || e.id == id) {
        return Some("already has a free-time slot");
    }
    if bucket.iter().any(|e| rules.free_time.matches(&e.activity)) {
        return Some("already has a free/autonomous activity");
    }
    if rules.skip_departure_days && bucket.iter().any(|e| rules.departure.matches(&e.activity)) {
        return Some("departure day");
    }
    None
}

/// `(hour, minute)` of the slot: last start time plus the configured offset,
/// hour clamped to the ceiling. An empty (or unreadable) day starts at the
/// ceiling hour.
pub fn free_time_anchor(bucket: &[EnrichedEntry], rules: &Rules) -> (u32, u32) {
    let ceiling = rules.free_time_ceiling_hour;

    // zero-padded HH:MM compares correctly as plain strings
    let Some((h, m)) = bucket
        .iter()
        .map(|e| e.time.as_str())
        .max()
        .and_then(hour_minute)
    else {
        return (ceiling, 0);
    };

    let total = (h * 60 + m).saturating_add(rules.free_time_offset_minutes);
    let hour = (total / 60).min(ceiling);
    let minute = match rules.free_time_minutes {
        FreeTimeMinutes::Zero => 0,
        FreeTimeMinutes::Preserve => total % 60,
    };
    (hour, minute)
}

pub fn free_time_id(date: &str, region: &str) -> String {
    format!("free_time_{date}_{region}")
}

fn free_time_entry(
    date: &str,
    region: &Region,
    (hour, minute): (u32, u32),
    rules: &Rules,
) -> EnrichedEntry {
    EnrichedEntry {
        id: free_time_id(date, region.as_str()),
        region: region.clone(),
        date: date.to_string(),
        time: format!("{hour:02}:{minute:02}"),
        activity: rules.free_time_label.clone(),
        location: None,
        description: None,
        is_meal: false,
        meal_type: None,
        time_category: TimeCategory::from_hour(hour),
        kind: EntryKind::FreeTime,
    }
}
