//! CSV export of a normalized time series

use crate::constants::{EXPORT_CSV_HEADER, EXPORT_FILENAME_PREFIX};
use crate::models::TimeSeries;
use tracing::debug;

/// Render a series as the dashboard's download CSV
///
/// Fixed four-column format, one line per record in series order. Numeric
/// fields use the shortest round-trip float form, so re-parsing an export
/// reproduces the normalized values exactly.
pub fn export_series_csv(series: &TimeSeries) -> String {
    use std::fmt::Write;

    // Pre-allocate: header + ~48 bytes per row
    let mut csv_content = String::with_capacity(64 + series.len() * 48);
    csv_content.push_str(EXPORT_CSV_HEADER);
    csv_content.push('\n');

    for record in series {
        let _ = writeln!(
            csv_content,
            "{},{},{},{}",
            record.timestamp,
            record.price,
            record.volume,
            record.full_date()
        );
    }

    debug!("Exported {} rows to CSV", series.len());
    csv_content
}

/// Download filename for a publisher's export
pub fn export_filename(publisher: &str) -> String {
    format!("{}{}.csv", EXPORT_FILENAME_PREFIX, publisher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRecord;
    use crate::services::series::build_series;

    fn sample_series() -> TimeSeries {
        let rows = vec![
            RawRecord {
                date: "14.03.2016".to_string(),
                price: "21,600".to_string(),
                volume: "311".to_string(),
                ..Default::default()
            },
            RawRecord {
                date: "15.03.2016".to_string(),
                price: "21,700.5".to_string(),
                volume: "".to_string(),
                ..Default::default()
            },
        ];
        build_series("ALK", &rows)
    }

    #[test]
    fn test_export_header_and_shape() {
        let csv = export_series_csv(&sample_series());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "timestamp,price,volume,fullDate");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(",14.03.2016"));
        assert_eq!(lines[1].split(',').count(), 4);
    }

    #[test]
    fn test_export_round_trips_numeric_fields() {
        let series = sample_series();
        let csv = export_series_csv(&series);

        for (line, record) in csv.lines().skip(1).zip(series.iter()) {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells[0].parse::<i64>().unwrap(), record.timestamp);
            assert_eq!(cells[1].parse::<f64>().unwrap(), record.price);
            assert_eq!(cells[2].parse::<f64>().unwrap(), record.volume);
            assert_eq!(cells[3], record.full_date());
        }
    }

    #[test]
    fn test_export_empty_series_is_header_only() {
        let csv = export_series_csv(&TimeSeries::new());
        assert_eq!(csv, "timestamp,price,volume,fullDate\n");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("ALK"), "StockData_ALK.csv");
        assert_eq!(export_filename("GRNT"), "StockData_GRNT.csv");
    }
}
