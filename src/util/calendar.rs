//! Calendar dimension derivation.
//!
//! The range covers every observed order date plus a configurable number of
//! extra years so that future orders already have a date row to join to.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{error::Error, model::calendar::CalendarDay};

/// Days appended per extra year; leap days are not accounted for.
const DAYS_PER_EXTRA_YEAR: u64 = 365;

/// Inclusive date range of the calendar dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// `true` when no valid order dates were observed and the default range was used
    pub is_default: bool,
}

impl CalendarRange {
    /// Number of calendar days in the range, both ends included.
    pub(crate) fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    /// One [`CalendarDay`] per date in the range, ascending.
    pub fn days(&self) -> Vec<CalendarDay> {
        self.start
            .iter_days()
            .take_while(|date| *date <= self.end)
            .map(CalendarDay::from_date)
            .collect()
    }
}

/// Computes the calendar range from observed order dates.
///
/// # Arguments
/// - `dates` - Valid (already cleaned) order dates, in any order
/// - `extra_years` - Years of 365 days appended after the latest order date
/// - `today` - Current date, used only for the default range
///
/// # Returns
/// - `Ok(CalendarRange)` - `[min(dates), max(dates) + 365 * extra_years]`, or
///   `[2020-01-01, today + 365]` when `dates` is empty
/// - `Err(Error::DateRange)` - The range end overflows the supported dates
pub fn calendar_range(
    dates: &[NaiveDate],
    extra_years: u32,
    today: NaiveDate,
) -> Result<CalendarRange, Error> {
    let (Some(min), Some(max)) = (dates.iter().min(), dates.iter().max()) else {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1)
            .ok_or_else(|| Error::DateRange("Failed to build default calendar start".to_string()))?;
        let end = today
            .checked_add_days(Days::new(DAYS_PER_EXTRA_YEAR))
            .ok_or_else(|| {
                Error::DateRange(format!("Default calendar end overflows after {}", today))
            })?;

        return Ok(CalendarRange {
            start,
            end,
            is_default: true,
        });
    };

    let end = max
        .checked_add_days(Days::new(DAYS_PER_EXTRA_YEAR * u64::from(extra_years)))
        .ok_or_else(|| {
            Error::DateRange(format!(
                "Calendar end overflows: {} + {} extra years",
                max, extra_years
            ))
        })?;

    Ok(CalendarRange {
        start: *min,
        end,
        is_default: false,
    })
}

impl CalendarDay {
    /// Derives every calendar attribute of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month() as i32;
        let day = date.day() as i32;
        let weekday = date.weekday();

        Self {
            date_key: year * 10_000 + month * 100 + day,
            full_date: date,
            year,
            month,
            month_name: date.format("%B").to_string(),
            quarter: (month - 1) / 3 + 1,
            half_year: (month - 1) / 6 + 1,
            day_of_month: day,
            day_of_week: weekday.number_from_monday() as i32,
            weekday_name: date.format("%A").to_string(),
            week_of_month: (day - 1) / 7 + 1,
            week_of_year: date.iso_week().week() as i32,
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
            is_holiday: false,
        }
    }
}
