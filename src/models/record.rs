use serde::{Deserialize, Serialize};

use super::RawRecord;

/// One normalized trading day, derived once from a raw row
///
/// Built by the series builder and never mutated afterwards; rows whose date
/// fails to parse never become records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    /// Milliseconds since the Unix epoch, UTC midnight of the trade date
    pub timestamp: i64,

    /// Normalized price (0.0 when the source text is empty or malformed)
    pub price: f64,

    /// Normalized volume (0.0 when the source text is empty or malformed)
    pub volume: f64,

    /// The source row, original date string preserved
    pub raw: RawRecord,
}

impl StockRecord {
    /// Original display form of the trade date
    pub fn full_date(&self) -> &str {
        &self.raw.date
    }
}
