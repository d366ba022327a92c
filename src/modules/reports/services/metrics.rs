use rust_decimal::Decimal;

use crate::modules::orders::{PaymentStatus, RawOrder, StockSnapshot};
use crate::modules::reports::models::{ProfitStatus, ReportRow, ReportSummary};

/// Computes the derived accounting scalars for one filtered record set
///
/// Formulas run in a fixed dependency order; each may use only values
/// produced before it:
///   1. net_purchase        = total_purchase - purchase_discount - purchase_return
///   2. net_sales           = total_sales - sell_discount - sell_return
///   3. cost_of_goods_sold  = opening_stock + net_purchase - closing_stock
///   4. gross_profit        = net_sales - cost_of_goods_sold
///   5. total_tax           = sum of row tax amounts
///   6. total_subtotal / total_revenue
///   7. average_order_value (guarded against empty sets)
///   8. net_profit and margins, when expenses are in scope
///
/// All accumulation is unrounded `Decimal`; rounding belongs to renderers.
pub struct MetricEngine;

impl MetricEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive the summary from the same filtered set that produced `rows`
    ///
    /// `stock` gates the stock-dependent metrics: when absent they come back
    /// `None`, never a fabricated zero. `total_expenses` gates net profit.
    pub fn summarize(
        &self,
        orders: &[RawOrder],
        rows: &[ReportRow],
        stock: Option<&StockSnapshot>,
        total_expenses: Option<Decimal>,
    ) -> ReportSummary {
        let total_orders = orders.len() as u64;
        let paid_orders = count_status(orders, PaymentStatus::Paid);
        let pending_orders = count_status(orders, PaymentStatus::Pending);
        let failed_orders = count_status(orders, PaymentStatus::Failed);

        // 1. net purchase (stock aggregate side)
        let net_purchase = stock.map(StockSnapshot::net_purchase);

        // 2. net sales: gross sales minus discounts minus returns, where
        // refunded orders are the return total
        let total_sales: Decimal = orders.iter().map(|o| o.total).sum();
        let sell_discount: Decimal = orders.iter().map(|o| o.discount).sum();
        let sell_return: Decimal = orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Refunded)
            .map(|o| o.grand_total)
            .sum();
        let net_sales = total_sales - sell_discount - sell_return;

        // 3-4. COGS and gross profit, only with the aggregate present
        let cost_of_goods_sold = stock.map(StockSnapshot::cost_of_goods_sold);
        let gross_profit = cost_of_goods_sold.map(|cogs| net_sales - cogs);
        let profit_status = gross_profit.map(ProfitStatus::from_value);

        // 5-6. pure row reductions (the co-derivation invariant)
        let total_tax: Decimal = rows.iter().map(|r| r.tax_amount).sum();
        let total_subtotal: Decimal = rows.iter().map(|r| r.subtotal).sum();
        let total_revenue: Decimal = orders.iter().map(|o| o.grand_total).sum();

        // 7. guarded averages
        let average_order_value = if total_orders > 0 {
            total_revenue / Decimal::from(total_orders)
        } else {
            Decimal::ZERO
        };
        let average_tax_rate = if total_subtotal > Decimal::ZERO {
            total_tax / total_subtotal * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        // 8. expense-dependent metrics and margins
        let net_profit = match (gross_profit, total_expenses) {
            (Some(gp), Some(expenses)) => Some(gp - expenses),
            _ => None,
        };
        let gross_profit_margin = gross_profit.map(|gp| margin(gp, net_sales));
        let net_profit_margin = net_profit.map(|np| margin(np, net_sales));

        ReportSummary {
            total_orders,
            paid_orders,
            pending_orders,
            failed_orders,
            total_revenue,
            total_tax,
            total_subtotal,
            net_sales,
            net_purchase,
            cost_of_goods_sold,
            gross_profit,
            profit_status,
            net_profit,
            gross_profit_margin,
            net_profit_margin,
            average_order_value,
            average_tax_rate,
        }
    }
}

impl Default for MetricEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn count_status(orders: &[RawOrder], status: PaymentStatus) -> u64 {
    orders
        .iter()
        .filter(|o| o.payment_status == status)
        .count() as u64
}

/// Percentage of `value` over `net_sales`, 0 when net sales is zero
fn margin(value: Decimal, net_sales: Decimal) -> Decimal {
    if net_sales == Decimal::ZERO {
        Decimal::ZERO
    } else {
        value / net_sales * Decimal::ONE_HUNDRED
    }
}
