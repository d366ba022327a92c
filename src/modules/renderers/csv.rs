use crate::core::{ReportError, Result};
use crate::modules::renderers::{columns, row_cells, totals_cells};
use crate::modules::reports::models::Report;

/// Render a report as CSV: fixed header, one data row per report row, then
/// a totals row whose values equal the summary after rounding
///
/// Quoting of text fields that contain commas is handled by the writer.
pub fn to_csv(report: &Report) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns(report.kind))
        .map_err(export_error)?;
    for row in &report.rows {
        writer
            .write_record(row_cells(report.kind, row))
            .map_err(export_error)?;
    }
    writer
        .write_record(totals_cells(report.kind, &report.summary))
        .map_err(export_error)?;

    let bytes = writer.into_inner().map_err(|e| export_error(e.error()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Export(e.to_string()))
}

fn export_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Export(err.to_string())
}
