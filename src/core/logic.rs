use crate::core::schedule::free_time::{bucket_by_day, flatten, synthesize_free_time};
use crate::core::schedule::group::{AgendaView, group};
use crate::core::schedule::travel::synthesize_travel;
use crate::core::schedule::{Rules, classify::classify};
use crate::models::activity::RawActivity;
use crate::models::entry::EnrichedEntry;
use crate::models::region::Region;
use crate::models::travel_table::LocationTravelTable;
use tracing::debug;

/// The enriched, chronologically ordered agenda produced by one engine pass.
/// Recomputed from the raw snapshot every time; never stored.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    pub entries: Vec<EnrichedEntry>,
}

pub struct Core;

impl Core {
    /// Run every stage over a raw snapshot:
    /// classify, insert travel, add free time, order by date and time.
    pub fn build_agenda(
        raw: &[RawActivity],
        rules: &Rules,
        table: &LocationTravelTable,
    ) -> Agenda {
        let classified = classify(raw, rules);
        let with_travel = synthesize_travel(classified, table, rules);
        let with_free_time = synthesize_free_time(bucket_by_day(with_travel), rules);

        let mut entries = flatten(with_free_time);
        entries.sort_by(|a, b| (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str())));

        debug!(input = raw.len(), output = entries.len(), "agenda built");
        Agenda { entries }
    }

    /// Keep only the records of `region`, mirroring the participant view that
    /// shows its own region only. An empty region keeps everything.
    pub fn select_region(raw: Vec<RawActivity>, region: &Region) -> Vec<RawActivity> {
        if region.is_empty() {
            return raw;
        }
        raw.into_iter().filter(|r| &r.region == region).collect()
    }
}

impl Agenda {
    pub fn view(&self) -> AgendaView<'_> {
        group(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose date fails `keep`. Applied after synthesis so
    /// anchors are computed on complete days.
    pub fn retain_dates<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.entries.retain(|e| keep(&e.date));
    }

    /// First date of the agenda, used to number trip days.
    pub fn first_date(&self) -> Option<&str> {
        self.entries.iter().map(|e| e.date.as_str()).min()
    }
}
