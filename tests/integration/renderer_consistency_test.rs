// Cross-renderer consistency: for one assembled report, the CSV totals row,
// the print-document summary block and the screen-table summary must carry
// the same digits after rounding.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use posreport::renderers::{to_csv, to_document, to_table};
use posreport::{
    DatePreset, PaymentStatus, ProductRef, RawOrder, RawOrderItem, Report, ReportConfig,
    ReportFilter, ReportInputs, ReportKind, ReportService, StockSnapshot, StoreScope,
};

fn order(invoice: &str, second: u32, unit_price: Decimal, tax: Decimal) -> RawOrder {
    let subtotal = unit_price * dec!(3);
    RawOrder {
        id: invoice.to_lowercase(),
        invoice: invoice.to_string(),
        store_id: 1,
        customer: "Walk-in".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, second).unwrap(),
        items: vec![RawOrderItem {
            product: ProductRef {
                name: "Filter Coffee".to_string(),
                sku: "SKU-FC".to_string(),
                category: "Drinks".to_string(),
                tax_rate: dec!(10),
                tax_included: false,
            },
            quantity: 3,
            unit_price,
            tax,
            subtotal,
        }],
        discount: dec!(0),
        total: subtotal,
        grand_total: subtotal + tax,
        payment_status: PaymentStatus::Paid,
    }
}

fn generate(kind: ReportKind, stock: Option<StockSnapshot>) -> Report {
    // Odd cent amounts so rounding actually has work to do
    let orders = vec![
        order("INV-1", 1, dec!(3.333), dec!(0.999)),
        order("INV-2", 2, dec!(7.777), dec!(2.331)),
        order("INV-3", 3, dec!(1.111), dec!(0.333)),
    ];
    ReportService::new(ReportConfig::default())
        .generate(
            kind,
            ReportFilter {
                store: StoreScope::all(),
                date_preset: DatePreset::ThisMonth,
                from_date: None,
                to_date: None,
                payment_status: None,
            },
            ReportInputs {
                orders,
                stock,
                total_expenses: None,
            },
            Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap(),
        )
        .unwrap()
}

fn summary_value(pairs: &[(String, String)], label: &str) -> String {
    pairs
        .iter()
        .find(|(l, _)| l == label)
        .unwrap_or_else(|| panic!("missing summary line {}", label))
        .1
        .clone()
}

#[test]
fn csv_totals_match_document_and_table_summaries() {
    let report = generate(ReportKind::Tax, None);
    let config = ReportConfig::default();

    let csv = to_csv(&report).unwrap();
    let doc = to_document(&report, &config);
    let table = to_table(&report, 1, 50);

    let totals_line = csv.trim_end().lines().last().unwrap();
    let cells: Vec<&str> = totals_line.split(',').collect();
    let csv_tax = cells[6].to_string();
    let csv_subtotal = cells[9].to_string();

    assert_eq!(csv_tax, summary_value(&doc.summary, "Total Tax"));
    assert_eq!(csv_tax, summary_value(&table.summary, "Total Tax"));
    assert_eq!(csv_subtotal, summary_value(&doc.summary, "Total Subtotal"));
    assert_eq!(csv_subtotal, summary_value(&table.summary, "Total Subtotal"));
}

#[test]
fn document_and_table_summaries_are_identical() {
    let stock = StockSnapshot {
        opening_stock_purchase_value: dec!(1000),
        opening_stock_sale_value: dec!(1400),
        closing_stock_purchase_value: dec!(800),
        closing_stock_sale_value: dec!(1100),
        total_purchase: dec!(500),
        purchase_discount: dec!(50),
        purchase_return: dec!(0),
    };
    let report = generate(ReportKind::ProfitAndLoss, Some(stock));
    let config = ReportConfig::default();

    let doc = to_document(&report, &config);
    let table = to_table(&report, 1, 2);

    // Different page sizes, same summary block
    assert_eq!(doc.summary, table.summary);
}

#[test]
fn renderers_do_not_reorder_rows() {
    let report = generate(ReportKind::Tax, None);
    let config = ReportConfig::default();

    let doc = to_document(&report, &config);
    let table = to_table(&report, 1, 50);
    let csv = to_csv(&report).unwrap();

    let doc_invoices: Vec<&str> = doc.rows.iter().map(|r| r[0].as_str()).collect();
    let table_invoices: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    let csv_invoices: Vec<&str> = csv
        .trim_end()
        .lines()
        .skip(1)
        .take(report.rows.len())
        .map(|line| line.split(',').next().unwrap())
        .collect();

    // Canonical order is created_at descending, fixed at assembly
    assert_eq!(doc_invoices, vec!["INV-3", "INV-2", "INV-1"]);
    assert_eq!(doc_invoices, table_invoices);
    assert_eq!(doc_invoices, csv_invoices);
}

#[test]
fn loss_renders_as_magnitude_with_status() {
    let stock = StockSnapshot {
        opening_stock_purchase_value: dec!(1000),
        opening_stock_sale_value: dec!(1400),
        closing_stock_purchase_value: dec!(800),
        closing_stock_sale_value: dec!(1100),
        total_purchase: dec!(500),
        purchase_discount: dec!(50),
        purchase_return: dec!(0),
    };
    // Net sales well below the 650 COGS
    let orders = vec![order("INV-1", 1, dec!(200), dec!(20))];
    let report = ReportService::new(ReportConfig::default())
        .generate(
            ReportKind::ProfitAndLoss,
            ReportFilter {
                store: StoreScope::all(),
                date_preset: DatePreset::ThisMonth,
                from_date: None,
                to_date: None,
                payment_status: None,
            },
            ReportInputs {
                orders,
                stock: Some(stock),
                total_expenses: None,
            },
            Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap(),
        )
        .unwrap();

    // 600 net sales - 650 COGS
    assert_eq!(report.summary.gross_profit, Some(dec!(-50)));

    let doc = to_document(&report, &ReportConfig::default());
    assert_eq!(summary_value(&doc.summary, "Gross Profit"), "50.00");
    assert_eq!(summary_value(&doc.summary, "Profit Status"), "loss");
}

#[test]
fn csv_rounding_is_half_up_to_two_decimals() {
    let report = generate(ReportKind::Tax, None);
    let csv = to_csv(&report).unwrap();

    // unit price 3.333 -> 3.33, tax 2.331 -> 2.33, subtotal 23.331 -> 23.33
    assert!(csv.contains("3.33"));
    assert!(csv.contains("23.33"));
    // total tax 0.999 + 2.331 + 0.333 = 3.663 -> 3.66
    let totals_line = csv.trim_end().lines().last().unwrap();
    assert!(totals_line.contains("3.66"));
}
