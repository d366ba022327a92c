use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::modules::renderers::{columns, header_line, row_cells, summary_lines, totals_cells};
use crate::modules::reports::models::Report;

/// Logical print/PDF document: header block, tabular body, summary block
///
/// The byte-level page encoder is an external collaborator; this is the
/// row/column contract it consumes. Summary values are the same strings the
/// CSV and screen surfaces show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintDocument {
    pub title: String,
    pub header: String,
    pub filter_description: String,
    pub generated_at: String,
    pub currency_symbol: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub totals: Vec<String>,
    pub summary: Vec<(String, String)>,
}

/// Build the print document for an assembled report
pub fn to_document(report: &Report, config: &ReportConfig) -> PrintDocument {
    PrintDocument {
        title: report.kind.title().to_string(),
        header: header_line(report),
        filter_description: report.filter.describe(),
        generated_at: report
            .generated_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        currency_symbol: config.currency_symbol.clone(),
        columns: columns(report.kind).iter().map(|c| c.to_string()).collect(),
        rows: report
            .rows
            .iter()
            .map(|row| row_cells(report.kind, row))
            .collect(),
        totals: totals_cells(report.kind, &report.summary),
        summary: summary_lines(&report.summary),
    }
}
