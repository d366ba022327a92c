pub mod models;
pub mod services;

pub use models::{DatePreset, ReportFilter, StoreScope};
pub use services::{filter_orders, DateRange, DateRangeResolver};
