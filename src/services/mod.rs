pub mod candles;
pub mod export;
pub mod ingest;
pub mod normalize;
pub mod series;
pub mod signals;
pub mod summary;

pub use candles::build_candles;
pub use export::{export_filename, export_series_csv};
pub use ingest::{load_analysis, load_history, load_publishers};
pub use normalize::{parse_locale_number, parse_trade_date};
pub use series::{build_series, filter_by_range};
pub use signals::{indicator_rows, report_for_record, signal_report, IndicatorRow, SignalTable};
pub use summary::compute_summary;
