use super::activity::{MealType, RawActivity};
use super::region::Region;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeCategory {
    Morning,
    Afternoon,
    Evening,
}

impl TimeCategory {
    /// morning < 12 <= afternoon < 18 <= evening
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeCategory::Morning
        } else if hour < 18 {
            TimeCategory::Afternoon
        } else {
            TimeCategory::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCategory::Morning => "morning",
            TimeCategory::Afternoon => "afternoon",
            TimeCategory::Evening => "evening",
        }
    }
}

/// What produced an entry: the admin (a normal activity) or one of the two
/// synthesis stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum EntryKind {
    Activity,
    Travel {
        #[serde(rename = "travelTime")]
        travel_time: u32,
    },
    FreeTime,
}

/// A display-ready agenda row: a classified RawActivity, or a synthesized
/// travel segment / free-time slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEntry {
    pub id: String,
    pub region: Region,
    pub date: String,
    pub time: String,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_meal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    pub time_category: TimeCategory,
    pub kind: EntryKind,
}

impl EnrichedEntry {
    /// Wrap a raw record. `time` must already be normalized to "HH:MM".
    pub fn from_raw(
        raw: &RawActivity,
        time: String,
        time_category: TimeCategory,
        is_meal: bool,
        meal_type: Option<MealType>,
    ) -> Self {
        Self {
            id: raw.id.clone(),
            region: raw.region.clone(),
            date: raw.date.clone(),
            time,
            activity: raw.activity.clone(),
            location: raw.location.clone(),
            description: raw.description.clone(),
            is_meal,
            meal_type,
            time_category,
            kind: EntryKind::Activity,
        }
    }

    pub fn is_travel(&self) -> bool {
        matches!(self.kind, EntryKind::Travel { .. })
    }

    pub fn is_free_time(&self) -> bool {
        matches!(self.kind, EntryKind::FreeTime)
    }

    pub fn travel_time(&self) -> Option<u32> {
        match self.kind {
            EntryKind::Travel { travel_time } => Some(travel_time),
            _ => None,
        }
    }

    /// Location with surrounding whitespace removed; `None` when blank.
    pub fn location_str(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn kind_str(&self) -> &'static str {
        match self.kind {
            EntryKind::Activity => "activity",
            EntryKind::Travel { .. } => "travel",
            EntryKind::FreeTime => "free_time",
        }
    }
}
