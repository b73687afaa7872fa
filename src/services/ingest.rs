//! Loading upstream payload files
//!
//! The fetch layer deposits JSON payloads (and occasionally raw CSV dumps)
//! on disk. String-level parsers are separated from the path-level loaders
//! so tests never touch the filesystem.

use crate::error::{AppError, Result};
use crate::models::{AnalysisResponse, HistoryResponse, PublishersResponse, RawRecord};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a historical payload: JSON, or a raw CSV dump by extension
pub fn load_history(path: &Path) -> Result<HistoryResponse> {
    ensure_exists(path)?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let response = if is_csv {
        let file = fs::File::open(path)?;
        let records = parse_history_csv(file)?;
        // CSV dumps carry no publisher column; the file stem names them
        let publisher = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        HistoryResponse { publisher, records }
    } else {
        parse_history_json(&fs::read_to_string(path)?)?
    };

    debug!(
        "Loaded {} historical rows from {}",
        response.records.len(),
        path.display()
    );
    Ok(response)
}

/// Load a technical-analysis payload (JSON)
pub fn load_analysis(path: &Path) -> Result<AnalysisResponse> {
    ensure_exists(path)?;
    let response = parse_analysis_json(&fs::read_to_string(path)?)?;
    debug!(
        "Loaded {} technical rows from {}",
        response.records.len(),
        path.display()
    );
    Ok(response)
}

/// Load the publisher catalog (JSON)
pub fn load_publishers(path: &Path) -> Result<PublishersResponse> {
    ensure_exists(path)?;
    parse_publishers_json(&fs::read_to_string(path)?)
}

/// Parse a historical payload from JSON text
pub fn parse_history_json(contents: &str) -> Result<HistoryResponse> {
    Ok(serde_json::from_str(contents)?)
}

/// Parse a technical-analysis payload from JSON text
pub fn parse_analysis_json(contents: &str) -> Result<AnalysisResponse> {
    Ok(serde_json::from_str(contents)?)
}

/// Parse a publisher catalog from JSON text
pub fn parse_publishers_json(contents: &str) -> Result<PublishersResponse> {
    Ok(serde_json::from_str(contents)?)
}

/// Parse a raw CSV dump into wire rows
///
/// Columns are matched by header name; `quantity` is accepted for `volume`
/// (the scraper's column name before the API rename). Unknown columns are
/// kept as string fields on the row.
pub fn parse_history_csv<R: std::io::Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let mut record = RawRecord::default();
        for (header, cell) in headers.iter().zip(row.iter()) {
            match header {
                "date" => record.date = cell.to_string(),
                "price" => record.price = cell.to_string(),
                "volume" | "quantity" => record.volume = cell.to_string(),
                "total_turnover" => record.total_turnover = cell.to_string(),
                _ => {
                    record
                        .fields
                        .insert(header.to_string(), Value::String(cell.to_string()));
                }
            }
        }
        records.push(record);
    }

    Ok(records)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(AppError::NotFound(format!(
            "Input file not found: {}",
            path.display()
        )))
    }
}
