//! Bundled fallback dataset, used when the archive is unreachable.

use crate::error::WeatherError;
use crate::types::{WeatherTable, DAILY_FIELDS};

/// One day of typical values, compiled into the binary.
const FALLBACK_CSV: &str = include_str!("../data/fallback_daily.csv");

/// Parse the bundled dataset into a [`WeatherTable`].
///
/// Columns follow [`DAILY_FIELDS`] order; a field absent from the CSV
/// header yields an empty column, mirroring how a missing field in a live
/// response is represented.
pub fn fallback_table() -> Result<WeatherTable, WeatherError> {
    let mut reader = csv::Reader::from_reader(FALLBACK_CSV.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| WeatherError::Fallback(format!("bad header: {e}")))?
        .clone();

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| WeatherError::Fallback(format!("bad record: {e}")))?;
        let row = record
            .iter()
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| WeatherError::Fallback(format!("bad value {field:?}: {e}")))
            })
            .collect::<Result<Vec<f64>, WeatherError>>()?;
        rows.push(row);
    }

    let mut table = WeatherTable::new();
    for field in DAILY_FIELDS {
        let values = match headers.iter().position(|h| h == field) {
            Some(idx) => rows.iter().filter_map(|row| row.get(idx).copied()).collect(),
            None => Vec::new(),
        };
        table.push_column(field, values);
    }
    Ok(table)
}
