//! Reading schedule snapshots exported by the persistence layer.

use crate::errors::{AppError, AppResult};
use crate::models::activity::RawActivity;
use crate::models::feed::ScheduleFeed;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn parse_feed(content: &str) -> AppResult<ScheduleFeed> {
    serde_json::from_str(content).map_err(|e| AppError::Feed(e.to_string()))
}

/// Load a JSON feed file and normalize it to raw activities.
pub fn load_activities(path: &Path) -> AppResult<Vec<RawActivity>> {
    let content = fs::read_to_string(path)?;
    let activities = parse_feed(&content)?.into_activities();
    debug!(path = %path.display(), count = activities.len(), "feed loaded");
    Ok(activities)
}
