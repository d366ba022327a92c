use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::config::ReportConfig;
use crate::core::{ReportError, Result};
use crate::modules::filters::models::DatePreset;

/// Half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// The unbounded all-time range
    pub fn all_time() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Start inclusive, end exclusive
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Resolves a named preset plus "now" into a concrete half-open interval
///
/// "Midnight" is midnight in the configured report timezone, converted back
/// to UTC; week start defaults to Sunday (the reference `getDay()`
/// convention) and is configurable per locale.
pub struct DateRangeResolver<'a> {
    config: &'a ReportConfig,
}

impl<'a> DateRangeResolver<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    pub fn resolve(
        &self,
        preset: DatePreset,
        now: DateTime<Utc>,
        custom_from: Option<NaiveDate>,
        custom_to: Option<NaiveDate>,
    ) -> Result<DateRange> {
        let today = self.local_date(now);
        let midnight = self.local_midnight(today);

        let range = match preset {
            DatePreset::Today => DateRange {
                start: midnight,
                end: self.local_midnight(today + Days::new(1)),
            },
            DatePreset::Yesterday => DateRange {
                start: self.local_midnight(today - Days::new(1)),
                end: midnight,
            },
            DatePreset::ThisWeek => DateRange {
                start: self.local_midnight(self.week_start(today)),
                end: now,
            },
            DatePreset::LastWeek => {
                let this_week = self.week_start(today);
                DateRange {
                    start: self.local_midnight(this_week - Days::new(7)),
                    end: self.local_midnight(this_week),
                }
            }
            DatePreset::ThisMonth => DateRange {
                start: self.local_midnight(first_of_month(today)),
                end: now,
            },
            DatePreset::LastMonth => {
                // Half-open equivalent of the reference's inclusive
                // 23:59:59 end: the whole previous month, nothing more.
                let this_month = first_of_month(today);
                DateRange {
                    start: self.local_midnight(this_month - Months::new(1)),
                    end: self.local_midnight(this_month),
                }
            }
            DatePreset::Last30Days => DateRange {
                start: self.local_midnight(today - Days::new(30)),
                end: now,
            },
            DatePreset::Last90Days => DateRange {
                start: self.local_midnight(today - Days::new(90)),
                end: now,
            },
            DatePreset::ThisYear => {
                let jan_first = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .expect("january 1st always exists");
                DateRange {
                    start: self.local_midnight(jan_first),
                    end: now,
                }
            }
            DatePreset::Custom => {
                let (from, to) = match (custom_from, custom_to) {
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
                // Inclusive-day semantics: the end bound covers `to` entirely
                DateRange {
                    start: self.local_midnight(from),
                    end: self.local_midnight(to + Days::new(1)),
                }
            }
            DatePreset::All => DateRange::all_time(),
        };

        Ok(range)
    }

    /// Calendar date of `now` in the report timezone
    fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.config.offset()).date_naive()
    }

    /// Midnight of a local calendar date, as a UTC instant
    fn local_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        self.config
            .offset()
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .single()
            .expect("fixed offsets have no DST gaps")
            .with_timezone(&Utc)
    }

    /// Most recent configured week-start day on or before `date`
    fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let offset = (7 + date.weekday().num_days_from_monday()
            - self.config.week_start.num_days_from_monday())
            % 7;
        date - Days::new(u64::from(offset))
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 always exists")
}
