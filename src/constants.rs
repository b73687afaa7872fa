//! Wire Format Constants
//!
//! Field naming and export conventions shared with the upstream fetch layer
//! and the dashboard that consumes exported files.
//!
//! ## Record field conventions
//!
//! Historical rows carry day-first dotted dates (`"31.12.2015"`) and
//! locale-formatted numerics with comma grouping (`"21,600"`). Technical
//! analysis rows carry ISO dates and indicator columns keyed by
//! `prefix + timeframe`, with the signal label stored under the same key
//! plus the `_sig` suffix (e.g. `rsi_short` / `rsi_short_sig`).

/// Day-first dotted date format used by historical rows
pub const RAW_DATE_FORMAT: &str = "%d.%m.%Y";

/// Suffix appended to an indicator field key to address its signal label
pub const SIGNAL_SUFFIX: &str = "_sig";

/// Signal labels emitted by the upstream analysis layer
///
/// Any other non-empty label (e.g. `"Hold"`) counts as neutral; an empty
/// string means the indicator produced no signal for that timeframe.
pub const SIGNAL_BUY: &str = "Buy";
pub const SIGNAL_SELL: &str = "Sell";

/// Header row of the exported per-publisher CSV
pub const EXPORT_CSV_HEADER: &str = "timestamp,price,volume,fullDate";

/// Filename prefix for exported per-publisher CSV files
/// (full name is `StockData_{publisher}.csv`)
pub const EXPORT_FILENAME_PREFIX: &str = "StockData_";
