//! Stage 5: chronological and per-region / per-date views over the agenda.
//! Views borrow the entries; nothing is copied.

use crate::models::entry::EnrichedEntry;
use crate::models::region::Region;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct AgendaView<'a> {
    /// Every entry, by date then time; ties keep input order.
    pub all: Vec<&'a EnrichedEntry>,
    pub by_region: BTreeMap<&'a Region, Vec<&'a EnrichedEntry>>,
    pub by_date: BTreeMap<&'a str, Vec<&'a EnrichedEntry>>,
    pub by_region_then_date: BTreeMap<&'a Region, BTreeMap<&'a str, Vec<&'a EnrichedEntry>>>,
}

pub fn group(entries: &[EnrichedEntry]) -> AgendaView<'_> {
    let mut all: Vec<&EnrichedEntry> = entries.iter().collect();
    all.sort_by(|a, b| (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str())));

    let mut view = AgendaView::default();
    for &e in &all {
        view.by_region.entry(&e.region).or_default().push(e);
        view.by_date.entry(e.date.as_str()).or_default().push(e);
        view.by_region_then_date
            .entry(&e.region)
            .or_default()
            .entry(e.date.as_str())
            .or_default()
            .push(e);
    }
    view.all = all;
    view
}

impl AgendaView<'_> {
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
