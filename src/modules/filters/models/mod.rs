pub mod report_filter;

pub use report_filter::{AllStores, DatePreset, ReportFilter, StoreScope};
