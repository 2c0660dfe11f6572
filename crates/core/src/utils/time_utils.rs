use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Converts a UTC instant to a calendar date in the given timezone.
pub fn date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Source of "today" for forecasts and snapshot capture.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, read in a configured timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        date_from_utc(Utc::now(), self.tz)
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Adds whole calendar months, clamping to the last day of shorter months
/// (Jan 31 + 1 month = Feb 28/29). Saturates at `NaiveDate::MAX`.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of complete calendar months from `from` to `to`.
///
/// A partial month does not count: 2024-01-31 to 2024-02-29 is zero months.
/// Negative when `to` precedes `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let from_month = i64::from(from.year()) * 12 + i64::from(from.month0());
    let to_month = i64::from(to.year()) * 12 + i64::from(to.month0());
    let mut total = to_month - from_month;
    let day_delta = i64::from(to.day()) - i64::from(from.day());
    if total > 0 && day_delta < 0 {
        total -= 1;
    } else if total < 0 && day_delta > 0 {
        total += 1;
    }
    total
}
