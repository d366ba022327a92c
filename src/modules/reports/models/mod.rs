pub mod report;
pub mod row;
pub mod summary;

pub use report::{Report, ReportKind};
pub use row::ReportRow;
pub use summary::{ProfitStatus, ReportSummary, STOCK_DEPENDENT_FIELDS};
