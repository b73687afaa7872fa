use serde::{Deserialize, Serialize};
use std::fmt;

/// Indicator timeframe used by the upstream analysis layer
///
/// Technical rows key their indicator columns as `prefix + timeframe`, so a
/// short-horizon RSI lives under `rsi_short` and its signal label under
/// `rsi_short_sig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Short horizon (fast indicator settings, daily charts)
    Short,
    /// Medium horizon (weekly charts)
    Medium,
    /// Long horizon (slow indicator settings, monthly charts)
    Long,
}

impl Timeframe {
    /// Wire key used inside indicator field names
    pub fn key(&self) -> &'static str {
        match self {
            Timeframe::Short => "short",
            Timeframe::Medium => "medium",
            Timeframe::Long => "long",
        }
    }

    /// Parse from wire key
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "short" => Some(Timeframe::Short),
            "medium" => Some(Timeframe::Medium),
            "long" => Some(Timeframe::Long),
            _ => None,
        }
    }

    /// Get all timeframes, shortest first
    pub fn all() -> Vec<Timeframe> {
        vec![Timeframe::Short, Timeframe::Medium, Timeframe::Long]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Short
    }
}

/// Chart interval selected by the user
///
/// Each interval maps to exactly one indicator timeframe: daily charts read
/// the short horizon, weekly the medium, monthly the long. The aggregation
/// functions accept any slice of timeframes; this mapping keeps the
/// one-interval-one-horizon behavior of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// Daily chart
    Day1,
    /// Weekly chart
    Week1,
    /// Monthly chart
    Month1,
}

impl Interval {
    /// Parse from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "1D" => Ok(Interval::Day1),
            "1W" => Ok(Interval::Week1),
            "1M" => Ok(Interval::Month1),
            _ => Err(format!("Invalid interval: '{}'. Valid values: 1D, 1W, 1M", s)),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day1 => "1D",
            Interval::Week1 => "1W",
            Interval::Month1 => "1M",
        }
    }

    /// Indicator timeframes this interval displays
    pub fn timeframes(&self) -> &'static [Timeframe] {
        match self {
            Interval::Day1 => &[Timeframe::Short],
            Interval::Week1 => &[Timeframe::Medium],
            Interval::Month1 => &[Timeframe::Long],
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Day1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_keys() {
        assert_eq!(Timeframe::Short.key(), "short");
        assert_eq!(Timeframe::Medium.key(), "medium");
        assert_eq!(Timeframe::Long.key(), "long");
    }

    #[test]
    fn test_timeframe_from_key() {
        assert_eq!(Timeframe::from_key("short"), Some(Timeframe::Short));
        assert_eq!(Timeframe::from_key("medium"), Some(Timeframe::Medium));
        assert_eq!(Timeframe::from_key("long"), Some(Timeframe::Long));
        assert_eq!(Timeframe::from_key("hourly"), None);
    }

    #[test]
    fn test_interval_from_str() {
        assert_eq!(Interval::from_str("1D").unwrap(), Interval::Day1);
        assert_eq!(Interval::from_str("1d").unwrap(), Interval::Day1);
        assert_eq!(Interval::from_str("1W").unwrap(), Interval::Week1);
        assert_eq!(Interval::from_str("1M").unwrap(), Interval::Month1);
        assert!(Interval::from_str("5m").is_err());
    }

    #[test]
    fn test_interval_maps_to_single_timeframe() {
        assert_eq!(Interval::Day1.timeframes(), &[Timeframe::Short]);
        assert_eq!(Interval::Week1.timeframes(), &[Timeframe::Medium]);
        assert_eq!(Interval::Month1.timeframes(), &[Timeframe::Long]);
    }

    #[test]
    fn test_interval_default() {
        assert_eq!(Interval::default(), Interval::Day1);
        assert_eq!(Interval::default().as_str(), "1D");
    }
}
