use std::path::Path;

use crate::error::{AppError, Result};
use crate::services;

pub fn run(input: &Path, publisher: Option<&str>, start: Option<&str>, end: Option<&str>) {
    println!("📊 Trading Summary\n");

    match show_summary(input, publisher, start, end) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_summary(
    input: &Path,
    publisher: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<()> {
    let response = services::load_history(input)?;
    let publisher = publisher.unwrap_or(&response.publisher);

    let series = services::build_series(publisher, &response.records);
    let filtered =
        services::filter_by_range(&series, parse_bound(start)?, parse_bound(end)?);

    println!(
        "🔹 {}: {} of {} records {}",
        publisher,
        filtered.len(),
        series.len(),
        range_label(start, end)
    );

    let stats = services::compute_summary(&filtered);
    println!();
    println!("   Highest Price:  {:>16.2}", stats.highest_price);
    println!("   Lowest Price:   {:>16.2}", stats.lowest_price);
    println!("   Average Price:  {:>16.2}", stats.average_price);
    println!("   Overall Change: {:>16}", stats.overall_change);
    println!("   Total Volume:   {:>16.2}", stats.total_volume);
    println!("   Total Turnover: {:>16.2}", stats.total_turnover);

    Ok(())
}

/// Parse an optional CLI date bound with the row-level date parser
fn parse_bound(bound: Option<&str>) -> Result<Option<i64>> {
    match bound {
        None => Ok(None),
        Some(text) => match services::parse_trade_date(text) {
            Some(ts) => Ok(Some(ts)),
            None => Err(AppError::InvalidInput(format!(
                "Invalid date '{}'. Expected DD.MM.YYYY",
                text
            ))),
        },
    }
}

fn range_label(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (None, None) => "(Full Range)".to_string(),
        (s, e) => format!("({} - {})", s.unwrap_or("Start"), e.unwrap_or("Present")),
    }
}
