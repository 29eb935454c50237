// src/export/model.rs

use crate::models::entry::EnrichedEntry;
use serde::Serialize;

/// Flat row for CSV / JSON export of the agenda.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub region: String,
    pub date: String,
    pub time: String,
    pub time_category: String,
    pub kind: String,
    pub activity: String,
    pub location: String,
    pub travel_time: Option<u32>,
    pub is_meal: bool,
    pub meal_type: String,
    pub description: String,
}

impl From<&EnrichedEntry> for EntryExport {
    fn from(e: &EnrichedEntry) -> Self {
        Self {
            id: e.id.clone(),
            region: e.region.to_string(),
            date: e.date.clone(),
            time: e.time.clone(),
            time_category: e.time_category.as_str().to_string(),
            kind: e.kind_str().to_string(),
            activity: e.activity.clone(),
            location: e.location.clone().unwrap_or_default(),
            travel_time: e.travel_time(),
            is_meal: e.is_meal,
            meal_type: e.meal_type.map(|m| m.as_str().to_string()).unwrap_or_default(),
            description: e.description.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn to_rows(entries: &[&EnrichedEntry]) -> Vec<EntryExport> {
    entries.iter().map(|e| EntryExport::from(*e)).collect()
}
