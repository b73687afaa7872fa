//! Signal aggregation over the latest technical row

use crate::models::{
    Indicator, IndicatorGroup, RawRecord, Signal, SignalReport, SignalTally, Timeframe,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Typed view of one row's signal fields
///
/// Built once per row by walking the fixed catalog against the selected
/// timeframes; lookups never touch raw string keys outside this constructor.
/// A field that is missing or empty has no entry at all and contributes
/// nothing to any tally, which is not the same as an explicit neutral label.
#[derive(Debug, Clone, Default)]
pub struct SignalTable {
    entries: BTreeMap<(Indicator, Timeframe), Signal>,
}

impl SignalTable {
    /// Read the signal fields of one row for the given timeframes
    pub fn from_record(record: &RawRecord, frames: &[Timeframe]) -> Self {
        let mut entries = BTreeMap::new();
        for indicator in Indicator::all() {
            for &frame in frames {
                if let Some(label) = record.signal_label(&indicator.signal_key(frame)) {
                    entries.insert((indicator, frame), Signal::from_label(label));
                }
            }
        }
        SignalTable { entries }
    }

    /// Signal of one indicator/timeframe cell, if the row carries one
    pub fn get(&self, indicator: Indicator, frame: Timeframe) -> Option<Signal> {
        self.entries.get(&(indicator, frame)).copied()
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tally one indicator group
    pub fn tally(&self, group: IndicatorGroup) -> SignalTally {
        SignalTally::from_signals(
            self.entries
                .iter()
                .filter(|((indicator, _), _)| indicator.group() == group)
                .map(|(_, &signal)| signal),
        )
    }

    /// Tally every populated cell
    pub fn overall(&self) -> SignalTally {
        SignalTally::from_signals(self.entries.values().copied())
    }
}

/// Aggregate the latest row's signals into grouped tallies
///
/// Aggregation always happens locally over the most recent row, the way the
/// dashboard does it; summary blocks a backend attaches are never trusted.
/// An empty record set yields the all-neutral empty report.
pub fn signal_report(records: &[RawRecord], frames: &[Timeframe]) -> SignalReport {
    let last = match records.last() {
        Some(row) => row,
        None => return SignalReport::default(),
    };
    report_for_record(last, frames)
}

/// Aggregate one row's signals into grouped tallies
pub fn report_for_record(record: &RawRecord, frames: &[Timeframe]) -> SignalReport {
    let table = SignalTable::from_record(record, frames);
    debug!("Aggregating {} signal cells", table.len());

    SignalReport {
        oscillators: table.tally(IndicatorGroup::Oscillator),
        moving_averages: table.tally(IndicatorGroup::MovingAverage),
        overall: table.overall(),
    }
}

/// One dashboard table row: an indicator's value and signal for a timeframe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub indicator: Indicator,
    pub timeframe: Timeframe,
    /// Numeric indicator value, absent when the row has none
    pub value: Option<f64>,
    /// Classified signal, absent when the row has none
    pub signal: Option<Signal>,
}

/// Assemble the indicator table for one row, catalog order
pub fn indicator_rows(record: &RawRecord, frames: &[Timeframe]) -> Vec<IndicatorRow> {
    let mut rows = Vec::with_capacity(Indicator::all().len() * frames.len());
    for indicator in Indicator::all() {
        for &frame in frames {
            rows.push(IndicatorRow {
                indicator,
                timeframe: frame,
                value: record.numeric_field(&indicator.value_key(frame)),
                signal: record
                    .signal_label(&indicator.signal_key(frame))
                    .map(Signal::from_label),
            });
        }
    }
    rows
}
