//! posreport Financial Report Aggregation Engine
//!
//! One shared, side-effect-free pipeline behind the sales, tax and
//! profit-and-loss report screens of a retail/POS console: resolve the date
//! range, filter the raw records, derive the accounting metrics, and hand a
//! frozen `Report` to interchangeable renderers (screen, CSV, print).

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::ReportConfig;
pub use crate::core::{ReportError, Result};
pub use modules::filters::{DatePreset, DateRange, DateRangeResolver, ReportFilter, StoreScope};
pub use modules::orders::{PaymentStatus, ProductRef, RawOrder, RawOrderItem, StockSnapshot};
pub use modules::renderers;
pub use modules::reports::{
    ProfitStatus, Report, ReportInputs, ReportKind, ReportRow, ReportSequencer, ReportService,
    ReportSummary,
};
