//! Candle reconstruction from close-only technical rows

use crate::models::{Candle, RawRecord};

/// Rebuild chart candles from rows that carry only a close
///
/// Rows arrive pre-sorted ascending (the analysis layer sorts before
/// serializing) and are used in received order. A missing close counts as
/// 0.0. The first candle opens at its own close; every later candle opens at
/// the previous close. Missing highs/lows derive from the open/close pair,
/// and volume is not sourced here.
pub fn build_candles(records: &[RawRecord]) -> Vec<Candle> {
    let mut prev_close = 0.0;

    records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let close = r.close.unwrap_or(0.0);
            let open = if idx == 0 { close } else { prev_close };
            let high = r.high.unwrap_or_else(|| open.max(close));
            let low = r.low.unwrap_or_else(|| open.min(close));
            prev_close = close;

            Candle {
                date: r.date.clone(),
                open,
                high,
                low,
                close,
                volume: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_row(date: &str, close: f64) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            close: Some(close),
            ..Default::default()
        }
    }

    #[test]
    fn test_opens_chain_from_previous_close() {
        let rows = vec![
            close_row("2016-03-14", 10.0),
            close_row("2016-03-15", 12.0),
            close_row("2016-03-16", 9.0),
        ];
        let candles = build_candles(&rows);

        let opens: Vec<f64> = candles.iter().map(|c| c.open).collect();
        assert_eq!(opens, vec![10.0, 10.0, 12.0]);

        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        assert_eq!(highs, vec![10.0, 12.0, 12.0]);

        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        assert_eq!(lows, vec![10.0, 10.0, 9.0]);

        assert!(candles.iter().all(|c| c.volume == 0.0));
    }

    #[test]
    fn test_given_high_low_win_over_derived() {
        let rows = vec![
            close_row("2016-03-14", 10.0),
            RawRecord {
                date: "2016-03-15".to_string(),
                close: Some(12.0),
                high: Some(13.5),
                low: Some(9.5),
                ..Default::default()
            },
        ];
        let candles = build_candles(&rows);

        assert_eq!(candles[1].high, 13.5);
        assert_eq!(candles[1].low, 9.5);
        assert_eq!(candles[1].open, 10.0);
    }

    #[test]
    fn test_missing_close_counts_as_zero() {
        let rows = vec![
            RawRecord {
                date: "2016-03-14".to_string(),
                ..Default::default()
            },
            close_row("2016-03-15", 5.0),
        ];
        let candles = build_candles(&rows);

        assert_eq!(candles[0].close, 0.0);
        assert_eq!(candles[0].open, 0.0);
        // Second candle opens at the zero close before it
        assert_eq!(candles[1].open, 0.0);
        assert_eq!(candles[1].high, 5.0);
    }

    #[test]
    fn test_empty_input_yields_no_candles() {
        assert!(build_candles(&[]).is_empty());
    }
}
