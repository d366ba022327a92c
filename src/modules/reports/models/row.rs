use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::orders::PaymentStatus;

/// One normalized, destination-agnostic line of tabular output
///
/// The same field set feeds every renderer; product-level fields are `None`
/// on order-granularity rows (sales reports), where `subtotal` carries the
/// order grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub invoice: String,
    pub date: DateTime<Utc>,
    pub store_id: i64,
    pub customer: String,
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    /// Line quantity, or total units for an order-granularity row
    pub quantity: i32,
    pub unit_price: Option<Decimal>,
    pub tax_amount: Decimal,
    /// Tax rate as a percentage; `None` on order-granularity rows
    pub tax_rate: Option<Decimal>,
    pub tax_included: Option<bool>,
    pub subtotal: Decimal,
    pub payment_status: PaymentStatus,
}
