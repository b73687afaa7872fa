mod candle;
mod indicator;
mod payload;
mod record;
mod signal;
mod summary;
mod timeframe;

pub use candle::Candle;
pub use indicator::{Indicator, IndicatorGroup};
pub use payload::{AnalysisResponse, HistoryResponse, PublishersResponse, RawRecord};
pub use record::StockRecord;
pub use signal::{Signal, SignalReport, SignalTally};
pub use summary::SummaryStats;
pub use timeframe::{Interval, Timeframe};

/// Trading history for a single publisher, sorted ascending by timestamp
pub type TimeSeries = Vec<StockRecord>;
