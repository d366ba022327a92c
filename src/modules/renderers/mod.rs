//! Destination renderers: pure functions from an assembled `Report` to a
//! screen table, a CSV export, or a logical print document.
//!
//! Every renderer sources its numbers from `Report.rows` / `Report.summary`
//! through the shared cell projection below; nothing is recomputed,
//! re-filtered or re-sorted past assembly, so the three surfaces cannot
//! disagree.

pub mod csv;
pub mod document;
pub mod table;

use crate::core::money::{format_amount, format_magnitude, format_percent};
use crate::modules::reports::models::{Report, ReportKind, ReportRow, ReportSummary};

pub use csv::to_csv;
pub use document::{to_document, PrintDocument};
pub use table::{to_table, ScreenTable};

/// Fixed column set per report kind, identical across all destinations
pub fn columns(kind: ReportKind) -> &'static [&'static str] {
    if kind.item_granularity() {
        &[
            "Invoice",
            "Date",
            "Product Name",
            "SKU",
            "Quantity",
            "Unit Price",
            "Tax Amount",
            "Tax Rate",
            "Tax Included",
            "Subtotal",
        ]
    } else {
        &[
            "Invoice",
            "Date",
            "Customer",
            "Status",
            "Items",
            "Tax Amount",
            "Total",
        ]
    }
}

/// Project one row into its display cells, numbers rounded to 2 decimals
pub fn row_cells(kind: ReportKind, row: &ReportRow) -> Vec<String> {
    let date = row.date.format("%Y-%m-%d %H:%M").to_string();
    if kind.item_granularity() {
        vec![
            row.invoice.clone(),
            date,
            row.product_name.clone().unwrap_or_default(),
            row.sku.clone().unwrap_or_default(),
            row.quantity.to_string(),
            row.unit_price.map(format_amount).unwrap_or_default(),
            format_amount(row.tax_amount),
            row.tax_rate.map(format_percent).unwrap_or_default(),
            match row.tax_included {
                Some(true) => "yes".to_string(),
                Some(false) => "no".to_string(),
                None => String::new(),
            },
            format_amount(row.subtotal),
        ]
    } else {
        vec![
            row.invoice.clone(),
            date,
            row.customer.clone(),
            row.payment_status.to_string(),
            row.quantity.to_string(),
            format_amount(row.tax_amount),
            format_amount(row.subtotal),
        ]
    }
}

/// Trailing totals row, column-aligned with `columns(kind)`
pub fn totals_cells(kind: ReportKind, summary: &ReportSummary) -> Vec<String> {
    if kind.item_granularity() {
        vec![
            "Totals".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_amount(summary.total_tax),
            String::new(),
            String::new(),
            format_amount(summary.total_subtotal),
        ]
    } else {
        vec![
            "Totals".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_amount(summary.total_tax),
            format_amount(summary.total_subtotal),
        ]
    }
}

/// Labeled summary lines, shared verbatim by every destination
///
/// Stock-dependent values render as "unavailable" when the aggregate was
/// missing; gross profit renders as a magnitude with a separate
/// profit/loss status line, per the sign policy.
pub fn summary_lines(summary: &ReportSummary) -> Vec<(String, String)> {
    let mut lines: Vec<(String, String)> = vec![
        ("Total Orders".to_string(), summary.total_orders.to_string()),
        ("Paid Orders".to_string(), summary.paid_orders.to_string()),
        (
            "Pending Orders".to_string(),
            summary.pending_orders.to_string(),
        ),
        (
            "Failed Orders".to_string(),
            summary.failed_orders.to_string(),
        ),
        (
            "Total Revenue".to_string(),
            format_amount(summary.total_revenue),
        ),
        ("Total Tax".to_string(), format_amount(summary.total_tax)),
        (
            "Total Subtotal".to_string(),
            format_amount(summary.total_subtotal),
        ),
        ("Net Sales".to_string(), format_amount(summary.net_sales)),
        (
            "Net Purchase".to_string(),
            amount_or_unavailable(summary.net_purchase),
        ),
        (
            "Cost of Goods Sold".to_string(),
            amount_or_unavailable(summary.cost_of_goods_sold),
        ),
        (
            "Gross Profit".to_string(),
            summary
                .gross_profit
                .map(format_magnitude)
                .unwrap_or_else(unavailable),
        ),
        (
            "Profit Status".to_string(),
            summary
                .profit_status
                .map(|s| s.to_string())
                .unwrap_or_else(unavailable),
        ),
    ];

    // Net profit is only in scope when an expense total was supplied; with
    // the aggregate missing it is unavailable like the other stock metrics.
    match (summary.net_profit, summary.cost_of_goods_sold) {
        (Some(net_profit), _) => {
            lines.push(("Net Profit".to_string(), format_amount(net_profit)));
            lines.push((
                "Net Profit Margin".to_string(),
                summary
                    .net_profit_margin
                    .map(format_percent)
                    .unwrap_or_else(unavailable),
            ));
        }
        (None, None) => {
            lines.push(("Net Profit".to_string(), unavailable()));
            lines.push(("Net Profit Margin".to_string(), unavailable()));
        }
        (None, Some(_)) => {}
    }

    lines.push((
        "Gross Profit Margin".to_string(),
        summary
            .gross_profit_margin
            .map(format_percent)
            .unwrap_or_else(unavailable),
    ));
    lines.push((
        "Average Order Value".to_string(),
        format_amount(summary.average_order_value),
    ));
    lines.push((
        "Average Tax Rate".to_string(),
        format_percent(summary.average_tax_rate),
    ));

    lines
}

fn amount_or_unavailable(value: Option<rust_decimal::Decimal>) -> String {
    value.map(format_amount).unwrap_or_else(unavailable)
}

fn unavailable() -> String {
    "unavailable".to_string()
}

/// Header text shared by the print and screen surfaces
pub fn header_line(report: &Report) -> String {
    format!(
        "{} | {} | generated {}",
        report.kind.title(),
        report.filter.describe(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
