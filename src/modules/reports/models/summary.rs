use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign discriminator for profit figures
///
/// Values stay signed internally; the discriminator lets renderers show a
/// magnitude plus "profit"/"loss" without hiding the sign in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitStatus {
    Profit,
    Loss,
}

impl ProfitStatus {
    pub fn from_value(value: Decimal) -> Self {
        if value < Decimal::ZERO {
            ProfitStatus::Loss
        } else {
            ProfitStatus::Profit
        }
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitStatus::Profit => write!(f, "profit"),
            ProfitStatus::Loss => write!(f, "loss"),
        }
    }
}

/// Derived scalars for one report, always computed over the entire filtered
/// set (never a display page)
///
/// All amounts are unrounded signed decimals; rounding happens only at the
/// render boundary. Stock-dependent fields are `None` when the stock
/// aggregate was absent; reported as unavailable, never zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_orders: u64,
    pub paid_orders: u64,
    pub pending_orders: u64,
    pub failed_orders: u64,

    /// Money received: sum of order grand totals
    pub total_revenue: Decimal,
    /// Sum of row tax amounts
    pub total_tax: Decimal,
    /// Sum of row subtotals
    pub total_subtotal: Decimal,
    /// Gross sales minus discounts and returns
    pub net_sales: Decimal,

    pub net_purchase: Option<Decimal>,
    pub cost_of_goods_sold: Option<Decimal>,
    pub gross_profit: Option<Decimal>,
    pub profit_status: Option<ProfitStatus>,
    pub net_profit: Option<Decimal>,
    pub gross_profit_margin: Option<Decimal>,
    pub net_profit_margin: Option<Decimal>,

    pub average_order_value: Decimal,
    /// Effective rate: total tax over total subtotal, as a percentage
    pub average_tax_rate: Decimal,
}

/// Summary fields that cannot be computed without the stock aggregate
pub const STOCK_DEPENDENT_FIELDS: &[&str] = &[
    "net_purchase",
    "cost_of_goods_sold",
    "gross_profit",
    "net_profit",
    "gross_profit_margin",
    "net_profit_margin",
];

impl ReportSummary {
    /// Names of the fields left unavailable by a missing stock aggregate
    pub fn unavailable_fields(&self) -> Vec<&'static str> {
        if self.cost_of_goods_sold.is_some() {
            return Vec::new();
        }
        STOCK_DEPENDENT_FIELDS.to_vec()
    }
}
