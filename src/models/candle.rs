use serde::{Deserialize, Serialize};

/// One reconstructed chart candle
///
/// Technical rows carry only a close (and sometimes high/low), so opens are
/// chained from the previous close and volume is not sourced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Trade date as carried by the source row (ISO form on technical rows)
    pub date: String,

    /// Opening price: previous row's close, or own close on the first row
    pub open: f64,

    /// Highest price, derived as max(open, close) when the row has none
    pub high: f64,

    /// Lowest price, derived as min(open, close) when the row has none
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Always 0 in this pipeline
    pub volume: f64,
}
