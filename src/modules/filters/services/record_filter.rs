use crate::modules::filters::models::ReportFilter;
use crate::modules::filters::services::date_range::DateRange;
use crate::modules::orders::RawOrder;

/// Select the orders matching store scope, time window and payment status
///
/// Pure subset operation: no order is mutated, and the result is stable
/// sorted by `created_at` descending, the canonical row order for every
/// report surface, applied once here and never re-sorted by a renderer.
pub fn filter_orders(orders: Vec<RawOrder>, filter: &ReportFilter, range: &DateRange) -> Vec<RawOrder> {
    let mut matched: Vec<RawOrder> = orders
        .into_iter()
        .filter(|order| filter.store.matches(order.store_id))
        .filter(|order| range.contains(order.created_at))
        .filter(|order| match filter.payment_status {
            Some(status) => order.payment_status == status,
            None => true,
        })
        .collect();

    // sort_by is stable: equal timestamps keep their upstream order
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}
