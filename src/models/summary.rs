use serde::{Deserialize, Serialize};

/// Aggregate statistics over one time series (or a filtered slice of it)
///
/// The default value is the empty-dataset state: zeros everywhere and a
/// literal `"0%"` change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Highest price in the series
    pub highest_price: f64,

    /// Lowest price in the series
    pub lowest_price: f64,

    /// Percent change from the first to the last price, pre-formatted
    /// (`"12.34%"`); exactly `"0%"` when the series is empty or opens at a
    /// zero price
    pub overall_change: String,

    /// Mean price, rounded to 2 decimal places
    pub average_price: f64,

    /// Sum of normalized volumes
    pub total_volume: f64,

    /// Sum of turnover columns, normalized at aggregation time
    pub total_turnover: f64,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            highest_price: 0.0,
            lowest_price: 0.0,
            overall_change: "0%".to_string(),
            average_price: 0.0,
            total_volume: 0.0,
            total_turnover: 0.0,
        }
    }
}
