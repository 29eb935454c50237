use super::model::EntryExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write agenda rows as CSV; the header comes from the row struct.
pub fn write_csv(path: &Path, rows: &[EntryExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
