use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main report engine error type
///
/// Errors are structured values; "no matching records" is never an error,
/// it produces an empty report with zeroed metrics instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Filter rejected before any record access (custom range missing a
    /// bound, inverted date range)
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// The stock/purchase aggregate required for stock-dependent metrics
    /// is absent for the requested store/interval
    #[error("Missing stock aggregate; unavailable fields: {}", FieldList(.fields))]
    MissingAggregate { fields: Vec<&'static str> },

    /// The external record-retrieval collaborator failed; propagated
    /// unchanged, the engine never retries
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Renderer failed to serialize an already-assembled report
    #[error("Export error: {0}")]
    Export(String),
}

struct FieldList<'a>(&'a [&'static str]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

// Helper functions for common error scenarios
impl ReportError {
    pub fn invalid_filter(msg: impl Into<String>) -> Self {
        ReportError::InvalidFilter(msg.into())
    }

    pub fn missing_aggregate(fields: Vec<&'static str>) -> Self {
        ReportError::MissingAggregate { fields }
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        ReportError::Upstream(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ReportError::Configuration(msg.into())
    }
}
