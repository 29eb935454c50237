//! Stage 2: time-of-day bucket and meal flag for every raw record.

use super::Rules;
use crate::models::activity::{MealType, RawActivity};
use crate::models::entry::{EnrichedEntry, TimeCategory};
use crate::utils::time::{format_time, normalize_time};
use chrono::Timelike;
use tracing::{debug, trace};

pub fn classify(raw: &[RawActivity], rules: &Rules) -> Vec<EnrichedEntry> {
    let entries: Vec<EnrichedEntry> = raw.iter().map(|r| classify_one(r, rules)).collect();

    debug!(
        classified = entries.len(),
        meals = entries.iter().filter(|e| e.is_meal).count(),
        "classification done"
    );
    entries
}

pub fn classify_one(raw: &RawActivity, rules: &Rules) -> EnrichedEntry {
    let (time, defaulted) = normalize_time(&raw.time, rules.default_time);
    if defaulted {
        trace!(id = %raw.id, time = %raw.time, "missing or malformed time, using default");
    }

    let detected = detect_meal(&raw.activity, rules);
    let is_meal = raw.is_meal || detected.is_some();
    let meal_type = raw.meal_type.or(detected);

    EnrichedEntry::from_raw(
        raw,
        format_time(time),
        TimeCategory::from_hour(time.hour()),
        is_meal,
        meal_type,
    )
}

/// Bucket for an "HH:MM" string; unparsable input uses the default time.
pub fn time_category(time: &str, rules: &Rules) -> TimeCategory {
    let (t, _) = normalize_time(time, rules.default_time);
    TimeCategory::from_hour(t.hour())
}

/// Meal kind named by the activity text, checked breakfast, lunch, dinner.
pub fn detect_meal(activity: &str, rules: &Rules) -> Option<MealType> {
    [
        (&rules.breakfast, MealType::Breakfast),
        (&rules.lunch, MealType::Lunch),
        (&rules.dinner, MealType::Dinner),
    ]
    .into_iter()
    .find(|(set, _)| set.matches(activity))
    .map(|(_, kind)| kind)
}
