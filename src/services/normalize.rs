//! Locale normalization for scraped rows
//!
//! The exchange publishes day-first dotted dates (`"31.12.2015"`) and
//! numerics with comma grouping (`"6,717,600"`). Both parsers are total:
//! a bad date is the `None` sentinel (callers drop the row), a bad numeric
//! is `0.0`. Malformed cells are data, not errors.

use chrono::NaiveDate;

use crate::constants::RAW_DATE_FORMAT;

/// Parse a day-first dotted date into milliseconds since the Unix epoch
///
/// The timestamp is UTC midnight of the trade date. Returns `None` when the
/// string does not read as exactly `DD.MM.YYYY`, a part is not an integer,
/// or the calendar date does not exist (e.g. `"31.02.2015"`).
pub fn parse_trade_date(input: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), RAW_DATE_FORMAT).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

/// Parse a locale-formatted numeric cell
///
/// Strips comma grouping separators; empty or malformed input is `0.0`.
pub fn parse_locale_number(input: &str) -> f64 {
    let cleaned = input.trim().replace(',', "");
    cleaned.parse().unwrap_or(0.0)
}
