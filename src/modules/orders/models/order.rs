// Raw transactional records as delivered by the external data source.
//
// The engine is read-only over these: line-level math (subtotal, tax) is
// trusted upstream and never re-derived, only aggregated.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of an order
///
/// Refunded orders stay in the filtered set (they are transactions inside
/// the window) and feed the sales-return side of net sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// Product identity carried on every order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
    pub sku: String,
    pub category: String,
    /// Tax rate as a percentage (e.g. 10 for 10%)
    pub tax_rate: Decimal,
    /// Whether the unit price already contains the tax
    pub tax_included: bool,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrderItem {
    pub product: ProductRef,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Tax amount for this line, as computed upstream
    pub tax: Decimal,
    /// Line subtotal net of line discount; asserted upstream, not recomputed
    pub subtotal: Decimal,
}

/// A sales order as fetched from the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrder {
    pub id: String,
    pub invoice: String,
    pub store_id: i64,
    pub customer: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<RawOrderItem>,
    /// Order-level discount
    pub discount: Decimal,
    /// Gross order total before discount
    pub total: Decimal,
    /// Amount actually charged (total minus discount, tax inclusive)
    pub grand_total: Decimal,
    pub payment_status: PaymentStatus,
}

impl RawOrder {
    /// Total units across all lines
    pub fn unit_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line tax amounts
    pub fn tax_total(&self) -> Decimal {
        self.items.iter().map(|item| item.tax).sum()
    }
}
