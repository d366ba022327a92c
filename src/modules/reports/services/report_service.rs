use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::ReportConfig;
use crate::core::{ReportError, Result};
use crate::modules::filters::models::ReportFilter;
use crate::modules::filters::services::{filter_orders, DateRangeResolver};
use crate::modules::orders::{RawOrder, StockSnapshot};
use crate::modules::reports::models::{Report, ReportKind, STOCK_DEPENDENT_FIELDS};
use crate::modules::reports::services::metrics::MetricEngine;
use crate::modules::reports::services::row_builder::build_rows;

/// Raw inputs handed over by the external data-fetching collaborator
///
/// The engine performs no I/O: records are already resident when it runs.
/// Upstream fetch failures arrive as `ReportError::Upstream` and pass
/// through unchanged; retries belong to the fetching layer.
#[derive(Debug, Clone, Default)]
pub struct ReportInputs {
    pub orders: Vec<RawOrder>,
    /// One stock/purchase aggregate for the same store/interval, if any
    pub stock: Option<StockSnapshot>,
    /// Expense ledger total for the interval, when expenses are in scope
    pub total_expenses: Option<Decimal>,
}

/// The report pipeline: validate, resolve, filter, project, summarize
///
/// Synchronous and side-effect free; each invocation owns its inputs and
/// produces one immutable `Report`.
pub struct ReportService {
    config: ReportConfig,
    metrics: MetricEngine,
}

impl ReportService {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            metrics: MetricEngine::new(),
        }
    }

    /// Generate one report for the given filter
    ///
    /// Zero matching records is not an error: the result is an empty-row
    /// report with zeroed (or unavailable) metrics. A profit-and-loss
    /// request without a stock aggregate fails with `MissingAggregate`
    /// rather than presenting fabricated profit figures.
    pub fn generate(
        &self,
        kind: ReportKind,
        filter: ReportFilter,
        inputs: ReportInputs,
        now: DateTime<Utc>,
    ) -> Result<Report> {
        filter.validate()?;

        if kind == ReportKind::ProfitAndLoss && inputs.stock.is_none() {
            warn!(report = %kind, "stock aggregate missing, rejecting profit-and-loss request");
            return Err(ReportError::missing_aggregate(
                STOCK_DEPENDENT_FIELDS.to_vec(),
            ));
        }

        let resolver = DateRangeResolver::new(&self.config);
        let range = resolver.resolve(filter.date_preset, now, filter.from_date, filter.to_date)?;
        debug!(
            report = %kind,
            start = %range.start,
            end = %range.end,
            "resolved report window"
        );

        let fetched = inputs.orders.len();
        let orders = filter_orders(inputs.orders, &filter, &range);
        let rows = build_rows(kind, &orders);
        let summary =
            self.metrics
                .summarize(&orders, &rows, inputs.stock.as_ref(), inputs.total_expenses);

        if orders.is_empty() {
            info!(report = %kind, filter = %filter.describe(), "no records matched the filter");
        } else {
            info!(
                report = %kind,
                filter = %filter.describe(),
                fetched,
                matched = orders.len(),
                rows = rows.len(),
                "report generated"
            );
        }

        Ok(Report {
            kind,
            filter,
            generated_at: now,
            rows,
            summary,
        })
    }
}
