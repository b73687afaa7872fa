//! Aggregate statistics over a time series

use crate::models::{SummaryStats, TimeSeries};
use crate::services::normalize::parse_locale_number;

/// Compute summary statistics for a series (or a filtered slice of one)
///
/// An empty series yields the default zero state. The overall change compares
/// the first price to the last in time order; a zero first price reports a
/// literal `"0%"` instead of dividing.
pub fn compute_summary(series: &TimeSeries) -> SummaryStats {
    if series.is_empty() {
        return SummaryStats::default();
    }

    let highest_price = series
        .iter()
        .map(|r| r.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest_price = series.iter().map(|r| r.price).fold(f64::INFINITY, f64::min);

    let price_sum: f64 = series.iter().map(|r| r.price).sum();
    let average_price = (price_sum / series.len() as f64 * 100.0).round() / 100.0;

    let first = series[0].price;
    let last = series[series.len() - 1].price;
    let overall_change = if first == 0.0 {
        "0%".to_string()
    } else {
        format!("{:.2}%", (last - first) / first * 100.0)
    };

    let total_volume = series.iter().map(|r| r.volume).sum();
    // Turnover stays textual on the record; normalize it at aggregation time
    let total_turnover = series
        .iter()
        .map(|r| parse_locale_number(&r.raw.total_turnover))
        .sum();

    SummaryStats {
        highest_price,
        lowest_price,
        overall_change,
        average_price,
        total_volume,
        total_turnover,
    }
}
