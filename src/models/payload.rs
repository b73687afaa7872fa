use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One row as received from the upstream fetch layer
///
/// Historical rows carry textual date/price/volume/turnover columns;
/// technical rows carry an ISO date, OHLC floats and indicator columns. Both
/// families deserialize into this shape: absent columns default, and every
/// column the struct does not name lands in `fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Trade date as scraped: day-first dotted on historical rows
    /// (`"31.12.2015"`), ISO on technical rows (`"2015-12-31"`)
    #[serde(default)]
    pub date: String,

    /// Last trade price, locale-formatted (`"21,600"`), possibly empty
    #[serde(default)]
    pub price: String,

    /// Traded volume, locale-formatted, possibly empty
    #[serde(default)]
    pub volume: String,

    /// Session turnover, locale-formatted, possibly empty
    #[serde(default)]
    pub total_turnover: String,

    /// Closing price (technical rows only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,

    /// Session high (technical rows only, often absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,

    /// Session low (technical rows only, often absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,

    /// Every remaining column: indicator values (`rsi_short`), signal labels
    /// (`rsi_short_sig`), extra scraped columns (`max`, `min`, `avg`, ...)
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl RawRecord {
    /// Read a non-empty signal label field
    ///
    /// The analysis layer writes `""` when an indicator produced no signal
    /// for a timeframe; such fields read as `None` here.
    pub fn signal_label(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Read a numeric field, tolerating number-as-string rows
    pub fn numeric_field(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.is_empty() => s.parse().ok(),
            _ => None,
        }
    }
}

/// Historical payload for one publisher
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub records: Vec<RawRecord>,
}

/// Technical-analysis payload for one publisher
///
/// Summary blocks the backend may attach alongside `records` are ignored on
/// purpose: tallies are always recomputed locally from the latest row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub records: Vec<RawRecord>,
    /// Human note from the analysis layer (row count, timeframe); surfaced
    /// as-is, never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Publisher catalog payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishersResponse {
    #[serde(default)]
    pub publishers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_row_keeps_unknown_columns() {
        let json = r#"{
            "date": "14.03.2016",
            "price": "21,600",
            "volume": "311",
            "total_turnover": "6,717,600",
            "max": "21,700",
            "min": "21,500"
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, "14.03.2016");
        assert_eq!(record.price, "21,600");
        assert_eq!(record.fields.get("max").unwrap(), "21,700");
        assert!(record.close.is_none());
    }

    #[test]
    fn test_missing_columns_default_empty() {
        let record: RawRecord = serde_json::from_str(r#"{"date": "01.02.2020"}"#).unwrap();
        assert_eq!(record.price, "");
        assert_eq!(record.volume, "");
        assert_eq!(record.total_turnover, "");
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_numeric_field_tolerates_strings() {
        let json = r#"{
            "date": "2016-03-14",
            "close": 21600.0,
            "rsi_short": 55.3,
            "sma_short": "21450.5",
            "cci_short": ""
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.close, Some(21600.0));
        assert_eq!(record.numeric_field("rsi_short"), Some(55.3));
        assert_eq!(record.numeric_field("sma_short"), Some(21450.5));
        assert_eq!(record.numeric_field("cci_short"), None);
        assert_eq!(record.numeric_field("wma_short"), None);
    }

    #[test]
    fn test_signal_label_skips_empty() {
        let json = r#"{
            "date": "2016-03-14",
            "rsi_short_sig": "Buy",
            "cci_short_sig": ""
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.signal_label("rsi_short_sig"), Some("Buy"));
        assert_eq!(record.signal_label("cci_short_sig"), None);
        assert_eq!(record.signal_label("macd_short_sig"), None);
    }

    #[test]
    fn test_analysis_response_ignores_backend_summaries() {
        let json = r#"{
            "publisher": "ALK",
            "records": [{"date": "2016-03-14", "close": 21600.0}],
            "msg": "Found 1 rows (tf=short)",
            "oscSummary": {"buy": 3, "sell": 1}
        }"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.publisher, "ALK");
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.msg.as_deref(), Some("Found 1 rows (tf=short)"));
    }
}
