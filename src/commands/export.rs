use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::services;

pub fn run(
    input: &Path,
    publisher: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    output: Option<PathBuf>,
) {
    println!("📤 CSV Export\n");

    match export(input, publisher, start, end, output) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn export(
    input: &Path,
    publisher: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let response = services::load_history(input)?;
    let publisher = publisher.unwrap_or(&response.publisher);

    let series = services::build_series(publisher, &response.records);
    let filtered =
        services::filter_by_range(&series, parse_bound(start)?, parse_bound(end)?);

    let csv = services::export_series_csv(&filtered);
    let path = output.unwrap_or_else(|| PathBuf::from(services::export_filename(publisher)));
    fs::write(&path, csv)?;

    println!(
        "✅ Exported {} of {} records to {}",
        filtered.len(),
        series.len(),
        path.display()
    );

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
