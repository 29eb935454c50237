use super::model::EntryExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write agenda rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
