use crate::modules::orders::RawOrder;
use crate::modules::reports::models::{ReportKind, ReportRow};

/// Project filtered orders into report rows, 1:1 with the input
///
/// Item granularity produces exactly one row per order line; order
/// granularity exactly one row per order. No row is dropped or duplicated,
/// and the input ordering (canonical `created_at` descending) is preserved.
pub fn build_rows(kind: ReportKind, orders: &[RawOrder]) -> Vec<ReportRow> {
    if kind.item_granularity() {
        orders.iter().flat_map(item_rows).collect()
    } else {
        orders.iter().map(order_row).collect()
    }
}

fn item_rows(order: &RawOrder) -> Vec<ReportRow> {
    order
        .items
        .iter()
        .map(|item| ReportRow {
            invoice: order.invoice.clone(),
            date: order.created_at,
            store_id: order.store_id,
            customer: order.customer.clone(),
            product_name: Some(item.product.name.clone()),
            sku: Some(item.product.sku.clone()),
            category: Some(item.product.category.clone()),
            quantity: item.quantity,
            unit_price: Some(item.unit_price),
            tax_amount: item.tax,
            tax_rate: Some(item.product.tax_rate),
            tax_included: Some(item.product.tax_included),
            subtotal: item.subtotal,
            payment_status: order.payment_status,
        })
        .collect()
}

fn order_row(order: &RawOrder) -> ReportRow {
    ReportRow {
        invoice: order.invoice.clone(),
        date: order.created_at,
        store_id: order.store_id,
        customer: order.customer.clone(),
        product_name: None,
        sku: None,
        category: None,
        quantity: order.unit_count(),
        unit_price: None,
        tax_amount: order.tax_total(),
        tax_rate: None,
        tax_included: None,
        // An order-granularity row carries the charged amount
        subtotal: order.grand_total,
        payment_status: order.payment_status,
    }
}
