//! Input shapes produced by the persistence layer's read operations.
//!
//! Two fetch paths exist: the participant listing returns
//! `{ success, schedules: [...] }` while the admin path returns the activities
//! of one region keyed by date. Hand-written fixtures are often a bare array.
//! All of them normalize to a flat `Vec<RawActivity>` before classification.

use super::activity::RawActivity;
use super::region::Region;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScheduleFeed {
    // tried first: a listing with every field defaulted accepts any object
    Admin {
        data: AdminData,
    },
    Listing {
        #[serde(default = "default_success")]
        success: bool,
        #[serde(default)]
        schedules: Vec<RawActivity>,
    },
    Bare(Vec<RawActivity>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminData {
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub activities: BTreeMap<String, Vec<RawActivity>>,
}

fn default_success() -> bool {
    true
}

impl ScheduleFeed {
    /// Flatten any feed shape into raw activities.
    ///
    /// - an unsuccessful listing yields nothing
    /// - date-keyed entries without their own `date` take the map key
    /// - entries without a `region` take the envelope's region, if any
    pub fn into_activities(self) -> Vec<RawActivity> {
        match self {
            ScheduleFeed::Listing { success, schedules } => {
                if !success {
                    warn!(
                        dropped = schedules.len(),
                        "schedule listing reported success=false; ignoring its payload"
                    );
                    return Vec::new();
                }
                schedules
            }
            ScheduleFeed::Admin { data } => {
                let AdminData { region, activities } = data;
                let mut out = Vec::new();
                for (date, items) in activities {
                    for mut item in items {
                        if item.date.trim().is_empty() {
                            item.date = date.clone();
                        }
                        if item.region.is_empty()
                            && let Some(r) = &region
                        {
                            item.region = r.clone();
                        }
                        out.push(item);
                    }
                }
                out
            }
            ScheduleFeed::Bare(items) => items,
        }
    }
}
