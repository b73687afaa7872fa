use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Interval, SignalTally};
use crate::services;

pub fn run(input: &Path, publisher: Option<&str>, interval: &str) {
    println!("📈 Technical Signals\n");

    match show_analysis(input, publisher, interval) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_analysis(input: &Path, publisher: Option<&str>, interval: &str) -> Result<()> {
    let interval = Interval::from_str(interval).map_err(AppError::InvalidInput)?;
    let response = services::load_analysis(input)?;
    let publisher = publisher.unwrap_or(&response.publisher);

    println!("🔹 {} ({} interval)", publisher, interval);
    if let Some(msg) = &response.msg {
        println!("   {}", msg);
    }

    if response.records.is_empty() {
        println!("\n⚠️  No indicator data available.");
        return Ok(());
    }

    let frames = interval.timeframes();
    let report = services::signal_report(&response.records, frames);

    println!();
    print_tally("Oscillators", &report.oscillators);
    print_tally("Moving Averages", &report.moving_averages);
    print_tally("Overall", &report.overall);

    // The table reads the same row the tallies came from
    if let Some(last) = response.records.last() {
        println!("\n   Indicator                    {:>12} {:>8}", "Value", "Signal");
        for row in services::indicator_rows(last, frames) {
            println!(
                "   {:<28} {:>12} {:>8}",
                format!("{} ({})", row.indicator.name(), row.indicator.group().label()),
                row.value.map_or("-".to_string(), |v| format!("{:.2}", v)),
                row.signal.map_or("-", |s| s.as_str())
            );
        }
    }

    let candles = services::build_candles(&response.records);
    if let Some(c) = candles.last() {
        println!(
            "\n   Last candle: {}  O {:.2}  H {:.2}  L {:.2}  C {:.2}",
            c.date, c.open, c.high, c.low, c.close
        );
    }

    Ok(())
}

fn print_tally(label: &str, tally: &SignalTally) {
    println!(
        "   {:<16} Buy {:>2}  Sell {:>2}  Neutral {:>2}  → {}",
        label, tally.buy, tally.sell, tally.neutral, tally.verdict
    );
}
