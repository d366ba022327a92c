use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pre-aggregated stock/purchase record for one store and interval
///
/// Exactly one of these accompanies a report invocation; it is the only
/// input to the stock-dependent metrics (net purchase, COGS, profits).
/// When absent, those metrics are reported as unavailable, never zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Inventory valuation at purchase price, start of interval
    pub opening_stock_purchase_value: Decimal,
    /// Inventory valuation at sale price, start of interval
    pub opening_stock_sale_value: Decimal,
    /// Inventory valuation at purchase price, end of interval
    pub closing_stock_purchase_value: Decimal,
    /// Inventory valuation at sale price, end of interval
    pub closing_stock_sale_value: Decimal,
    pub total_purchase: Decimal,
    pub purchase_discount: Decimal,
    pub purchase_return: Decimal,
}

impl StockSnapshot {
    /// Net purchase: gross purchases minus discounts and returns
    pub fn net_purchase(&self) -> Decimal {
        self.total_purchase - self.purchase_discount - self.purchase_return
    }

    /// Cost of goods sold: opening stock + net purchase - closing stock,
    /// all at purchase value
    pub fn cost_of_goods_sold(&self) -> Decimal {
        self.opening_stock_purchase_value + self.net_purchase() - self.closing_stock_purchase_value
    }
}
