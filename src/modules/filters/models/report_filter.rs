use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{ReportError, Result};
use crate::modules::orders::PaymentStatus;

/// Store scope of a report: one store or the whole tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreScope {
    All(AllStores),
    Store(i64),
}

/// Marker for the "all" store scope so the JSON wire shape stays `"all" | id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllStores {
    All,
}

impl StoreScope {
    pub fn all() -> Self {
        StoreScope::All(AllStores::All)
    }

    pub fn matches(&self, store_id: i64) -> bool {
        match self {
            StoreScope::All(_) => true,
            StoreScope::Store(id) => *id == store_id,
        }
    }
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreScope::All(_) => write!(f, "all stores"),
            StoreScope::Store(id) => write!(f, "store {}", id),
        }
    }
}

/// Named date-range presets, resolved against "now" by the date resolver
///
/// One shared enum replaces the per-screen switch chains of the reference
/// console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatePreset {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    Last30Days,
    Last90Days,
    ThisYear,
    Custom,
    All,
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DatePreset::Today => "today",
            DatePreset::Yesterday => "yesterday",
            DatePreset::ThisWeek => "this week",
            DatePreset::LastWeek => "last week",
            DatePreset::ThisMonth => "this month",
            DatePreset::LastMonth => "last month",
            DatePreset::Last30Days => "last 30 days",
            DatePreset::Last90Days => "last 90 days",
            DatePreset::ThisYear => "this year",
            DatePreset::Custom => "custom range",
            DatePreset::All => "all time",
        };
        write!(f, "{}", label)
    }
}

/// The plain filter object handed in by the (external) UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub store: StoreScope,
    pub date_preset: DatePreset,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub payment_status: Option<PaymentStatus>,
}

impl ReportFilter {
    /// Validate the filter before any record access
    ///
    /// A custom preset with a missing bound is an input error, never
    /// silently coerced to all-time.
    pub fn validate(&self) -> Result<()> {
        if self.date_preset != DatePreset::Custom {
            return Ok(());
        }

        let (from, to) = match (self.from_date, self.to_date) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(ReportError::invalid_filter(
                    "custom preset requires both from_date and to_date",
                ))
            }
        };

        if from > to {
            return Err(ReportError::invalid_filter(format!(
                "from_date ({}) must be before or equal to to_date ({})",
                from, to
            )));
        }

        Ok(())
    }

    /// Human-readable filter description for print headers
    pub fn describe(&self) -> String {
        let range = match self.date_preset {
            DatePreset::Custom => match (self.from_date, self.to_date) {
                (Some(from), Some(to)) => format!("{} to {}", from, to),
                _ => self.date_preset.to_string(),
            },
            preset => preset.to_string(),
        };
        match self.payment_status {
            Some(status) => format!("{}, {}, {} orders", self.store, range, status),
            None => format!("{}, {}", self.store, range),
        }
    }
}
