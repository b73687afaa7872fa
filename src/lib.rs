//! Time-series transformation and signal aggregation for Macedonian Stock
//! Exchange data.
//!
//! The engine sits between an upstream fetch layer (which deposits JSON/CSV
//! payloads) and a display layer: it normalizes locale-formatted historical
//! rows into sorted time series, computes summary statistics, filters by
//! date range, reconstructs chart candles from close-only technical rows,
//! aggregates indicator signals into grouped tallies, and renders the
//! dashboard's export CSV.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
