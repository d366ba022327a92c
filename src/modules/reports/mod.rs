pub mod models;
pub mod services;

pub use models::{ProfitStatus, Report, ReportKind, ReportRow, ReportSummary};
pub use services::{MetricEngine, ReportInputs, ReportSequencer, ReportService};
