pub mod metrics;
pub mod report_service;
pub mod row_builder;
pub mod sequencer;

pub use metrics::MetricEngine;
pub use report_service::{ReportInputs, ReportService};
pub use row_builder::build_rows;
pub use sequencer::ReportSequencer;
