use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::filters::models::ReportFilter;
use crate::modules::reports::models::row::ReportRow;
use crate::modules::reports::models::summary::ReportSummary;

/// The three report surfaces of the admin console
///
/// Sales reports run at order granularity (one row per order); tax and
/// profit-and-loss reports run at line granularity (one row per order item).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    Sales,
    Tax,
    ProfitAndLoss,
}

impl ReportKind {
    /// Report title used by the print renderer
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Tax => "Tax Report",
            ReportKind::ProfitAndLoss => "Profit & Loss Report",
        }
    }

    /// Whether rows are one-per-order-item (vs one-per-order)
    pub fn item_granularity(&self) -> bool {
        matches!(self, ReportKind::Tax | ReportKind::ProfitAndLoss)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One fully assembled report: rows plus summary, frozen at `generated_at`
///
/// The unit handed to any renderer. Never mutated after assembly; a filter
/// change produces a wholesale replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub kind: ReportKind,
    pub filter: ReportFilter,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl Report {
    /// Slice of rows for one display page (1-based page number)
    ///
    /// Pagination affects only which rows the screen shows; the summary is
    /// always over the entire filtered set.
    pub fn page(&self, page: usize, per_page: usize) -> &[ReportRow] {
        if per_page == 0 {
            return &[];
        }
        let start = page.saturating_sub(1).saturating_mul(per_page);
        if start >= self.rows.len() {
            return &[];
        }
        let end = (start + per_page).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Number of display pages at the given page size
    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.rows.len().div_ceil(per_page)
    }
}
