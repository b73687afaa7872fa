use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timeframe;
use crate::constants::SIGNAL_SUFFIX;

/// Indicator family, used to group signal tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorGroup {
    Oscillator,
    MovingAverage,
}

impl IndicatorGroup {
    /// Human-readable group label
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorGroup::Oscillator => "Oscillator",
            IndicatorGroup::MovingAverage => "Moving Average",
        }
    }
}

/// The fixed indicator catalog emitted by the upstream analysis layer
///
/// Five oscillators and five moving averages. Technical rows store each
/// indicator under `prefix + timeframe` (numeric value) and
/// `prefix + timeframe + "_sig"` (signal label), e.g. `rsi_short` and
/// `rsi_short_sig`. Lookups go through [`value_key`](Indicator::value_key) /
/// [`signal_key`](Indicator::signal_key) so the key scheme lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Relative Strength Index
    Rsi,
    /// Stochastic oscillator
    Stoch,
    /// Commodity Channel Index
    Cci,
    /// Williams %R
    WilliamsR,
    /// Moving Average Convergence Divergence
    Macd,
    /// Simple moving average
    Sma,
    /// Exponential moving average
    Ema,
    /// Weighted moving average
    Wma,
    /// Zero-lag exponential moving average
    Zlema,
    /// Bollinger middle band
    Boll,
}

impl Indicator {
    /// Wire prefix of this indicator's field keys
    pub fn prefix(&self) -> &'static str {
        match self {
            Indicator::Rsi => "rsi_",
            Indicator::Stoch => "stoch_",
            Indicator::Cci => "cci_",
            Indicator::WilliamsR => "williamsr_",
            Indicator::Macd => "macd_",
            Indicator::Sma => "sma_",
            Indicator::Ema => "ema_",
            Indicator::Wma => "wma_",
            Indicator::Zlema => "zlema_",
            Indicator::Boll => "boll_",
        }
    }

    /// Display name shown by the dashboard
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Rsi => "RSI",
            Indicator::Stoch => "Stoch",
            Indicator::Cci => "CCI",
            Indicator::WilliamsR => "Williams %R",
            Indicator::Macd => "MACD",
            Indicator::Sma => "SMA",
            Indicator::Ema => "EMA",
            Indicator::Wma => "WMA",
            Indicator::Zlema => "ZLEMA",
            Indicator::Boll => "BollMid",
        }
    }

    /// Group this indicator belongs to
    pub fn group(&self) -> IndicatorGroup {
        match self {
            Indicator::Rsi
            | Indicator::Stoch
            | Indicator::Cci
            | Indicator::WilliamsR
            | Indicator::Macd => IndicatorGroup::Oscillator,
            Indicator::Sma
            | Indicator::Ema
            | Indicator::Wma
            | Indicator::Zlema
            | Indicator::Boll => IndicatorGroup::MovingAverage,
        }
    }

    /// Field key of the indicator's numeric value for a timeframe
    pub fn value_key(&self, timeframe: Timeframe) -> String {
        format!("{}{}", self.prefix(), timeframe.key())
    }

    /// Field key of the indicator's signal label for a timeframe
    pub fn signal_key(&self, timeframe: Timeframe) -> String {
        format!("{}{}{}", self.prefix(), timeframe.key(), SIGNAL_SUFFIX)
    }

    /// Get the full catalog, oscillators first (dashboard table order)
    pub fn all() -> Vec<Indicator> {
        let mut indicators = Indicator::oscillators();
        indicators.extend(Indicator::moving_averages());
        indicators
    }

    /// Get the oscillator group
    pub fn oscillators() -> Vec<Indicator> {
        vec![
            Indicator::Rsi,
            Indicator::Stoch,
            Indicator::Cci,
            Indicator::WilliamsR,
            Indicator::Macd,
        ]
    }

    /// Get the moving-average group
    pub fn moving_averages() -> Vec<Indicator> {
        vec![
            Indicator::Sma,
            Indicator::Ema,
            Indicator::Wma,
            Indicator::Zlema,
            Indicator::Boll,
        ]
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
