//! Stage 3: travel segments between consecutive activities at different places.
//!
//! Synthesized travel entries already present in the input are dropped and
//! regenerated, so feeding the stage its own output does not stack segments.

use super::{Rules, same_day, sort_by_day};
use crate::models::entry::{EnrichedEntry, EntryKind};
use crate::models::travel_table::LocationTravelTable;
use tracing::{debug, trace};

pub fn synthesize_travel(
    entries: Vec<EnrichedEntry>,
    table: &LocationTravelTable,
    rules: &Rules,
) -> Vec<EnrichedEntry> {
    let mut base: Vec<EnrichedEntry> = entries.into_iter().filter(|e| !e.is_travel()).collect();
    sort_by_day(&mut base);

    let mut segments: Vec<Option<EnrichedEntry>> = Vec::with_capacity(base.len());
    let mut seq = 0;
    for (i, current) in base.iter().enumerate() {
        if i > 0 && !same_day(&base[i - 1], current) {
            seq = 0;
        }

        let segment = next_activity(&base, i)
            .and_then(|next| travel_between(current, next, table, rules, seq + 1));
        if segment.is_some() {
            seq += 1;
        }
        segments.push(segment);
    }

    let inserted = segments.iter().filter(|s| s.is_some()).count();
    let mut out = Vec::with_capacity(base.len() + inserted);
    for (entry, segment) in base.into_iter().zip(segments) {
        out.push(entry);
        out.extend(segment);
    }

    debug!(inserted, total = out.len(), "travel synthesis done");
    out
}

/// The next normal activity of the same day after position `i`, if `i` is a
/// normal activity itself. Free-time slots in between are stepped over.
fn next_activity(entries: &[EnrichedEntry], i: usize) -> Option<&EnrichedEntry> {
    let current = &entries[i];
    if current.kind != EntryKind::Activity {
        return None;
    }
    entries[i + 1..]
        .iter()
        .take_while(|e| same_day(current, e))
        .find(|e| e.kind == EntryKind::Activity)
}

/// A travel entry for the pair, or `None` when the pair does not need one:
/// either side is a meal, lacks a location, or both share the same location
/// once surrounding whitespace is ignored.
pub fn travel_between(
    current: &EnrichedEntry,
    next: &EnrichedEntry,
    table: &LocationTravelTable,
    rules: &Rules,
    seq: usize,
) -> Option<EnrichedEntry> {
    if current.is_meal || next.is_meal {
        return None;
    }
    let (from, to) = (current.location_str()?, next.location_str()?);
    if from == to {
        return None;
    }

    let minutes = table.lookup(from, to);
    trace!(from, to, minutes, date = %current.date, "travel segment");

    Some(EnrichedEntry {
        id: travel_id(&current.date, current.region.as_str(), seq),
        region: current.region.clone(),
        date: current.date.clone(),
        // approximation: the segment reuses its predecessor's start time
        time: current.time.clone(),
        activity: rules.travel_label.clone(),
        location: Some(format!("{from} → {to}")),
        description: None,
        is_meal: false,
        meal_type: None,
        time_category: current.time_category,
        kind: EntryKind::Travel {
            travel_time: minutes,
        },
    })
}

pub fn travel_id(date: &str, region: &str, seq: usize) -> String {
    format!("travel_{date}_{region}_{seq}")
}
