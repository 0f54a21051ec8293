use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::retry::RetryConfig;

/// Default archive API endpoint.
pub const ARCHIVE_API_BASE: &str = "https://archive-api.open-meteo.com";

/// Default query coordinate.
pub const DEFAULT_LATITUDE: f64 = 52.52;
pub const DEFAULT_LONGITUDE: f64 = 13.41;

/// The daily meteorological fields requested from the archive, in request
/// order. This order also fixes the column order of [`WeatherTable`].
pub const DAILY_FIELDS: [&str; 13] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "temperature_2m_mean",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "apparent_temperature_mean",
    "precipitation_sum",
    "rain_sum",
    "snowfall_sum",
    "precipitation_hours",
    "windspeed_10m_max",
    "windgusts_10m_max",
    "shortwave_radiation_sum",
];

/// Whether a fetch was served by the live archive or degraded to the
/// bundled fallback dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchOutcome {
    /// Live data was obtained from the archive (or its cache).
    Full,
    /// The archive was unavailable; the fallback dataset was substituted.
    Partial,
}

/// One named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// An ordered table of named numeric columns, one row per requested day.
///
/// Column order is the request order of [`DAILY_FIELDS`]; a field missing
/// from the response is represented as an empty column in its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherTable {
    columns: Vec<Column>,
}

impl WeatherTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows, taken as the longest column. Columns may be ragged
    /// when the response omitted fields.
    pub fn num_rows(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Construction-time settings for [`crate::ArchiveClient`].
#[derive(Debug, Clone)]
pub struct ArchiveSettings {
    /// Base URL of the archive service, without the `/v1/archive` path.
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Location of the persistent response cache database.
    pub cache_path: PathBuf,
    pub retry: RetryConfig,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            base_url: ARCHIVE_API_BASE.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            cache_path: PathBuf::from("http_cache.db"),
            retry: RetryConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn table_columns_keep_insertion_order() {
        let mut table = WeatherTable::new();
        table.push_column("b", vec![1.0]);
        table.push_column("a", vec![2.0]);

        let names: Vec<_> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn num_rows_uses_longest_column() {
        let mut table = WeatherTable::new();
        table.push_column("full", vec![1.0]);
        table.push_column("missing", vec![]);

        assert_eq!(table.num_rows(), 1);
        assert!(table.column("missing").unwrap().values.is_empty());
    }

    #[test]
    fn empty_table() {
        let table = WeatherTable::new();
        assert!(table.is_empty());
        assert_eq!(table.num_rows(), 0);
        assert!(table.column("anything").is_none());
    }
}
