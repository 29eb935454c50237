use super::region::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

/// An admin-entered calendar entry, as handed over by the persistence layer.
///
/// Field names follow the stored documents (`isMeal`, `mealType`). Every field
/// tolerates absence so that partially filled documents still load; the
/// classifier turns gaps into defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub date: String, // "YYYY-MM-DD"
    #[serde(default)]
    pub time: String, // "HH:MM"
    #[serde(default)]
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_meal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl RawActivity {
    /// Minimal constructor used by tests and by callers building input by hand.
    pub fn new(
        region: impl Into<Region>,
        date: &str,
        time: &str,
        activity: &str,
        location: Option<&str>,
    ) -> Self {
        Self {
            region: region.into(),
            date: date.to_string(),
            time: time.to_string(),
            activity: activity.to_string(),
            location: location.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_meal(mut self, meal_type: Option<MealType>) -> Self {
        self.is_meal = true;
        self.meal_type = meal_type;
        self
    }
}
