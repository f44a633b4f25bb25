//! Field cleaners for noisy extract values.
//!
//! None of these functions fail. A value that cannot be cleaned degrades to
//! `None` (phone, date) or `0.0` (price) and the row carries on.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only layouts tried in order; month-first wins for ambiguous slashes.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Layouts carrying a time of day, which is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Normalizes a phone number to digits with an optional leading `+`.
///
/// Values exported by spreadsheets in scientific notation (`1.23E+11`) are
/// read as a number and rendered as a plain integer instead.
///
/// # Returns
/// - `Some(String)` - The cleaned phone number
/// - `None` - Input was missing, unreadable scientific notation, or held no digits
pub fn clean_phone(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;

    let cleaned = if raw.contains(['e', 'E']) {
        let value = raw.parse::<f64>().ok().filter(|value| value.is_finite())?;
        format!("{:.0}", value.trunc())
    } else {
        let mut cleaned = String::with_capacity(raw.len());
        if raw.starts_with('+') {
            cleaned.push('+');
        }
        cleaned.extend(raw.chars().filter(char::is_ascii_digit));
        cleaned
    };

    cleaned
        .chars()
        .any(|c| c.is_ascii_digit())
        .then_some(cleaned)
}

/// Parses a price, falling back to `0.0` for anything that is not a finite,
/// non-negative number.
pub fn clean_price(raw: Option<&str>) -> f64 {
    raw.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}

/// Years a cleaned date may fall in; the range of a nanosecond timestamp.
const DATE_YEARS: RangeInclusive<i32> = 1677..=2262;

/// Best-effort date parse.
///
/// Spreadsheet error markers (`#`, `#N/A`, `#VALUE!`, ...), unparseable
/// values and dates outside [`DATE_YEARS`] yield `None`.
pub fn clean_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;

    parse_date(raw).filter(|date| DATE_YEARS.contains(&date.year()))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {

    if raw.starts_with('#') {
        return None;
    }

    if let Some(date) = parse_compact_date(raw) {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// `YYYYMMDD`, the layout of the warehouse's own date keys.
fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = raw[0..4].parse().ok()?;
    let month = raw[4..6].parse().ok()?;
    let day = raw[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
