// Property-based tests for the metric formulas
//
// The binding invariants: summary totals are pure reductions over the row
// list (co-derivation), and gross profit equals net sales minus COGS
// exactly, for any input.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use posreport::modules::reports::services::{build_rows, MetricEngine};
use posreport::{PaymentStatus, ProductRef, RawOrder, RawOrderItem, ReportKind, StockSnapshot};

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn order_from(seed: (i64, i64, u8, Vec<(i64, i64)>)) -> RawOrder {
    let (total_cents, discount_cents, status, lines) = seed;
    let items: Vec<RawOrderItem> = lines
        .into_iter()
        .enumerate()
        .map(|(i, (subtotal_cents, tax_cents))| RawOrderItem {
            product: ProductRef {
                name: format!("Product {}", i),
                sku: format!("SKU-{}", i),
                category: "General".to_string(),
                tax_rate: Decimal::from(10),
                tax_included: false,
            },
            quantity: 1,
            unit_price: cents(subtotal_cents),
            tax: cents(tax_cents),
            subtotal: cents(subtotal_cents),
        })
        .collect();
    let payment_status = match status % 4 {
        0 => PaymentStatus::Paid,
        1 => PaymentStatus::Pending,
        2 => PaymentStatus::Failed,
        _ => PaymentStatus::Refunded,
    };
    RawOrder {
        id: "o".to_string(),
        invoice: "INV".to_string(),
        store_id: 1,
        customer: "Walk-in".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
        items,
        discount: cents(discount_cents),
        total: cents(total_cents),
        grand_total: cents(total_cents - discount_cents),
        payment_status,
    }
}

fn arb_orders() -> impl Strategy<Value = Vec<RawOrder>> {
    prop::collection::vec(
        (
            0i64..1_000_000i64,
            0i64..10_000i64,
            any::<u8>(),
            prop::collection::vec((0i64..100_000i64, 0i64..10_000i64), 0..5),
        )
            .prop_map(order_from),
        0..20,
    )
}

fn arb_snapshot() -> impl Strategy<Value = StockSnapshot> {
    (
        0i64..1_000_000i64,
        0i64..1_000_000i64,
        0i64..500_000i64,
        0i64..50_000i64,
        0i64..50_000i64,
    )
        .prop_map(|(opening, closing, purchase, discount, ret)| StockSnapshot {
            opening_stock_purchase_value: cents(opening),
            opening_stock_sale_value: cents(opening),
            closing_stock_purchase_value: cents(closing),
            closing_stock_sale_value: cents(closing),
            total_purchase: cents(purchase),
            purchase_discount: cents(discount),
            purchase_return: cents(ret),
        })
}

proptest! {
    #[test]
    fn summary_totals_are_row_reductions(orders in arb_orders()) {
        let rows = build_rows(ReportKind::Tax, &orders);
        let summary = MetricEngine::new().summarize(&orders, &rows, None, None);

        let row_tax: Decimal = rows.iter().map(|r| r.tax_amount).sum();
        let row_subtotal: Decimal = rows.iter().map(|r| r.subtotal).sum();

        prop_assert_eq!(summary.total_tax, row_tax);
        prop_assert_eq!(summary.total_subtotal, row_subtotal);
    }

    #[test]
    fn gross_profit_is_net_sales_minus_cogs(
        orders in arb_orders(),
        snapshot in arb_snapshot()
    ) {
        let rows = build_rows(ReportKind::ProfitAndLoss, &orders);
        let summary = MetricEngine::new().summarize(&orders, &rows, Some(&snapshot), None);

        let cogs = summary.cost_of_goods_sold.unwrap();
        prop_assert_eq!(summary.gross_profit.unwrap(), summary.net_sales - cogs);
        prop_assert_eq!(
            summary.net_purchase.unwrap(),
            snapshot.total_purchase - snapshot.purchase_discount - snapshot.purchase_return
        );
    }

    #[test]
    fn average_order_value_never_divides_by_zero(orders in arb_orders()) {
        let rows = build_rows(ReportKind::Sales, &orders);
        let summary = MetricEngine::new().summarize(&orders, &rows, None, None);

        if orders.is_empty() {
            prop_assert_eq!(summary.average_order_value, Decimal::ZERO);
        } else {
            let expected = summary.total_revenue / Decimal::from(orders.len() as u64);
            prop_assert_eq!(summary.average_order_value, expected);
        }
    }

    #[test]
    fn status_counts_partition_the_order_set(orders in arb_orders()) {
        let summary = MetricEngine::new().summarize(&orders, &[], None, None);
        let refunded = orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Refunded)
            .count() as u64;
        prop_assert_eq!(
            summary.paid_orders + summary.pending_orders + summary.failed_orders + refunded,
            summary.total_orders
        );
    }

    #[test]
    fn stock_metrics_unavailable_without_aggregate(orders in arb_orders()) {
        let summary = MetricEngine::new().summarize(&orders, &[], None, None);
        prop_assert!(summary.cost_of_goods_sold.is_none());
        prop_assert!(summary.gross_profit.is_none());
        prop_assert_eq!(
            summary.unavailable_fields(),
            vec![
                "net_purchase",
                "cost_of_goods_sold",
                "gross_profit",
                "net_profit",
                "gross_profit_margin",
                "net_profit_margin",
            ]
        );
    }
}
