use chrono::{FixedOffset, Weekday};
use serde::Deserialize;
use std::env;

use crate::core::{ReportError, Result};

/// Report engine configuration
///
/// The reference console hard-coded Sunday week starts (JS `getDay()`) and
/// the browser's local timezone; both are explicit knobs here.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// First day of the week for the thisWeek/lastWeek presets
    pub week_start: Weekday,
    /// Fixed offset (whole hours from UTC) in which "midnight" is computed
    pub utc_offset_hours: i32,
    /// Symbol prepended to currency values on screen and print surfaces
    pub currency_symbol: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            utc_offset_hours: 0,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = ReportConfig {
            week_start: env::var("REPORT_WEEK_START")
                .unwrap_or_else(|_| "sunday".to_string())
                .parse()
                .map_err(|_| {
                    ReportError::configuration("Invalid REPORT_WEEK_START (expected a weekday name)")
                })?,
            utc_offset_hours: env::var("REPORT_UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .map_err(|_| ReportError::configuration("Invalid REPORT_UTC_OFFSET_HOURS"))?,
            currency_symbol: env::var("REPORT_CURRENCY_SYMBOL").unwrap_or_else(|_| "$".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ReportError::configuration(format!(
                "utc_offset_hours must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }

        if self.currency_symbol.is_empty() {
            return Err(ReportError::configuration(
                "currency_symbol must not be empty",
            ));
        }

        Ok(())
    }

    /// The configured report timezone as a chrono offset
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).expect("validated offset")
    }
}
