pub mod date_range;
pub mod record_filter;

pub use date_range::{DateRange, DateRangeResolver};
pub use record_filter::filter_orders;
