use super::fs_utils::ensure_writable;
use super::model::to_rows;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::core::logic::Agenda;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the agenda, in chronological order, to `file`.
    ///
    /// - `format`: csv | json
    /// - `force`: overwrite without asking
    pub fn export(agenda: &Agenda, format: &ExportFormat, file: &Path, force: bool) -> AppResult<()> {
        if agenda.is_empty() {
            return Err(AppError::Export("nothing to export".into()));
        }

        ensure_writable(file, force)?;

        let view = agenda.view();
        let rows = to_rows(&view.all);

        match format {
            ExportFormat::Csv => csv::write_csv(file, &rows)?,
            ExportFormat::Json => json::write_json(file, &rows)?,
        }

        info!(format = format.as_str(), rows = rows.len(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), rows.len(), file);
        Ok(())
    }
}
