use serde::{Deserialize, Serialize};

use crate::modules::renderers::{columns, row_cells, summary_lines};
use crate::modules::reports::models::Report;

/// Screen table: one display page of rows plus the full-set summary
///
/// Pagination slices rows only; the summary always reflects the entire
/// filtered set, never the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub page: usize,
    pub per_page: usize,
    pub total_rows: usize,
    pub total_pages: usize,
    pub summary: Vec<(String, String)>,
}

/// Build the screen table for one page of an assembled report
pub fn to_table(report: &Report, page: usize, per_page: usize) -> ScreenTable {
    ScreenTable {
        columns: columns(report.kind).iter().map(|c| c.to_string()).collect(),
        rows: report
            .page(page, per_page)
            .iter()
            .map(|row| row_cells(report.kind, row))
            .collect(),
        page,
        per_page,
        total_rows: report.rows.len(),
        total_pages: report.total_pages(per_page),
        summary: summary_lines(&report.summary),
    }
}
