//! Time-series construction and date-range filtering

use crate::models::{RawRecord, StockRecord, TimeSeries};
use crate::services::normalize::{parse_locale_number, parse_trade_date};
use tracing::debug;

/// Build a publisher's time series from raw historical rows
///
/// Rows whose date fails to parse are dropped; price and volume normalize to
/// 0.0 when malformed. The result is sorted ascending by timestamp, and rows
/// sharing a timestamp keep their input order. The publisher is provenance
/// for logging only.
pub fn build_series(publisher: &str, records: &[RawRecord]) -> TimeSeries {
    let mut series: TimeSeries = records
        .iter()
        .filter_map(|raw| {
            let timestamp = parse_trade_date(&raw.date)?;
            Some(StockRecord {
                timestamp,
                price: parse_locale_number(&raw.price),
                volume: parse_locale_number(&raw.volume),
                raw: raw.clone(),
            })
        })
        .collect();

    // Sort by time (stable: equal timestamps keep input order)
    series.sort_by_key(|r| r.timestamp);

    debug!(
        "Built time series for {}: kept {} of {} rows",
        publisher,
        series.len(),
        records.len()
    );
    series
}

/// Keep records inside an inclusive timestamp range
///
/// An absent bound is open on that side; with both bounds absent the output
/// is identical to the input. An inverted range is empty, not an error.
pub fn filter_by_range(series: &TimeSeries, start: Option<i64>, end: Option<i64>) -> TimeSeries {
    let lo = start.unwrap_or(i64::MIN);
    let hi = end.unwrap_or(i64::MAX);

    series
        .iter()
        .filter(|r| r.timestamp >= lo && r.timestamp <= hi)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_row(date: &str, price: &str, volume: &str) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            price: price.to_string(),
            volume: volume.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_series_sorted_ascending() {
        let rows = vec![
            raw_row("14.03.2016", "21,600", "311"),
            raw_row("12.01.2015", "19,000", "5"),
            raw_row("30.06.2015", "20,500", "40"),
        ];
        let series = build_series("ALK", &rows);

        assert_eq!(series.len(), 3);
        assert!(series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(series[0].full_date(), "12.01.2015");
        assert_eq!(series[2].full_date(), "14.03.2016");
        assert_eq!(series[2].price, 21600.0);
        assert_eq!(series[2].volume, 311.0);
    }

    #[test]
    fn test_build_series_drops_unparseable_dates() {
        let rows = vec![
            raw_row("14.03.2016", "100", "1"),
            raw_row("2016-03-15", "200", "2"),
            raw_row("", "300", "3"),
            raw_row("garbage", "400", "4"),
        ];
        let series = build_series("ALK", &rows);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].price, 100.0);
    }

    #[test]
    fn test_build_series_is_stable_for_equal_dates() {
        let rows = vec![
            raw_row("05.05.2018", "1", "10"),
            raw_row("05.05.2018", "2", "20"),
            raw_row("01.01.2018", "3", "30"),
        ];
        let series = build_series("ALK", &rows);

        assert_eq!(series[0].price, 3.0);
        // Same-day rows keep input order
        assert_eq!(series[1].price, 1.0);
        assert_eq!(series[2].price, 2.0);
    }

    #[test]
    fn test_build_series_zero_fills_bad_numerics() {
        let rows = vec![raw_row("14.03.2016", "", "n/a")];
        let series = build_series("ALK", &rows);

        assert_eq!(series[0].price, 0.0);
        assert_eq!(series[0].volume, 0.0);
    }

    #[test]
    fn test_filter_without_bounds_is_identity() {
        let rows = vec![
            raw_row("01.01.2015", "1", "1"),
            raw_row("02.01.2015", "2", "2"),
        ];
        let series = build_series("ALK", &rows);
        let filtered = filter_by_range(&series, None, None);

        assert_eq!(filtered.len(), series.len());
        assert!(filtered
            .iter()
            .zip(series.iter())
            .all(|(a, b)| a.timestamp == b.timestamp && a.price == b.price));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let rows = vec![
            raw_row("01.01.2015", "1", "1"),
            raw_row("02.01.2015", "2", "2"),
            raw_row("03.01.2015", "3", "3"),
        ];
        let series = build_series("ALK", &rows);
        let start = series[0].timestamp;
        let end = series[1].timestamp;

        let filtered = filter_by_range(&series, Some(start), Some(end));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].price, 2.0);

        let tail = filter_by_range(&series, Some(end), None);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].price, 2.0);
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let rows = vec![raw_row("01.01.2015", "1", "1")];
        let series = build_series("ALK", &rows);
        let ts = series[0].timestamp;

        let filtered = filter_by_range(&series, Some(ts + 1), Some(ts - 1));
        assert!(filtered.is_empty());
    }
}
