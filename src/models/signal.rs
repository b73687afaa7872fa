use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{SIGNAL_BUY, SIGNAL_SELL};

/// Trading signal emitted by one indicator, or the verdict over many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    /// Classify a non-empty wire label
    ///
    /// `"Buy"` and `"Sell"` match exactly; any other label (`"Hold"`, unknown
    /// text) counts as neutral. An empty label means "no signal" and must be
    /// filtered out before classification, it never reaches a tally.
    pub fn from_label(label: &str) -> Self {
        match label {
            SIGNAL_BUY => Signal::Buy,
            SIGNAL_SELL => Signal::Sell,
            _ => Signal::Neutral,
        }
    }

    /// Majority verdict over buy/sell counts (neutral votes never tip it)
    pub fn verdict(buy: usize, sell: usize) -> Self {
        if buy > sell {
            Signal::Buy
        } else if sell > buy {
            Signal::Sell
        } else {
            Signal::Neutral
        }
    }

    /// Convert to the dashboard's label form
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::Neutral
    }
}

/// Buy/sell/neutral counts over one set of indicator signals
///
/// The default value is the empty tally: zero counts, Neutral verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTally {
    pub buy: usize,
    pub sell: usize,
    pub neutral: usize,
    pub verdict: Signal,
}

impl SignalTally {
    /// Count signals and derive the majority verdict
    pub fn from_signals<I>(signals: I) -> Self
    where
        I: IntoIterator<Item = Signal>,
    {
        let mut tally = SignalTally::default();
        for signal in signals {
            match signal {
                Signal::Buy => tally.buy += 1,
                Signal::Sell => tally.sell += 1,
                Signal::Neutral => tally.neutral += 1,
            }
        }
        tally.verdict = Signal::verdict(tally.buy, tally.sell);
        tally
    }

    /// Total number of contributing signals
    pub fn total(&self) -> usize {
        self.buy + self.sell + self.neutral
    }
}

/// Grouped tallies aggregated from the latest technical row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReport {
    pub oscillators: SignalTally,
    pub moving_averages: SignalTally,
    pub overall: SignalTally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact_match() {
        assert_eq!(Signal::from_label("Buy"), Signal::Buy);
        assert_eq!(Signal::from_label("Sell"), Signal::Sell);
        assert_eq!(Signal::from_label("Hold"), Signal::Neutral);
        assert_eq!(Signal::from_label("buy"), Signal::Neutral);
        assert_eq!(Signal::from_label("Strong Buy"), Signal::Neutral);
    }

    #[test]
    fn test_verdict_majority() {
        assert_eq!(Signal::verdict(2, 1), Signal::Buy);
        assert_eq!(Signal::verdict(1, 3), Signal::Sell);
        assert_eq!(Signal::verdict(1, 1), Signal::Neutral);
        assert_eq!(Signal::verdict(0, 0), Signal::Neutral);
    }

    #[test]
    fn test_tally_from_signals() {
        let tally = SignalTally::from_signals([
            Signal::Buy,
            Signal::Buy,
            Signal::Sell,
            Signal::Neutral,
        ]);
        assert_eq!(tally.buy, 2);
        assert_eq!(tally.sell, 1);
        assert_eq!(tally.neutral, 1);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.verdict, Signal::Buy);
    }

    #[test]
    fn test_empty_tally_is_neutral() {
        let tally = SignalTally::default();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.verdict, Signal::Neutral);
        assert_eq!(tally, SignalTally::from_signals([]));
    }
}
