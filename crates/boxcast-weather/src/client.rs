//! Weather-archive API client.
//!
//! Issues single-day range queries against the archive endpoint. Responses
//! are cached indefinitely keyed by request parameters; transient failures
//! are retried, and exhaustion degrades to the bundled fallback dataset
//! rather than surfacing an error.

use chrono::NaiveDate;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::cache::ResponseCache;
use crate::error::WeatherError;
use crate::fallback::fallback_table;
use crate::retry::with_retry;
use crate::types::{ArchiveSettings, FetchOutcome, WeatherTable, DAILY_FIELDS};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ArchiveClient {
    client: reqwest::Client,
    settings: ArchiveSettings,
    cache: Mutex<ResponseCache>,
}

impl ArchiveClient {
    pub fn new(settings: ArchiveSettings) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let cache = Mutex::new(ResponseCache::new(&settings.cache_path)?);

        Ok(Self {
            client,
            settings,
            cache,
        })
    }

    /// The canonical parameter string for a date. Doubles as the cache key.
    fn request_query(&self, date: NaiveDate) -> String {
        let day = date.format("%Y-%m-%d");
        format!(
            "latitude={}&longitude={}&start_date={day}&end_date={day}&daily={}&timezone=auto",
            self.settings.latitude,
            self.settings.longitude,
            DAILY_FIELDS.join(","),
        )
    }

    /// Fetch the daily weather fields for a single date.
    ///
    /// Returns `Full` with live (or cached) data on success, `Partial` with
    /// the fallback dataset when the archive is unavailable. Errors are
    /// reserved for faults that cannot be degraded: an unusable cache
    /// database, an unparseable fallback dataset, or a malformed success
    /// body.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_daily(
        &self,
        date: NaiveDate,
    ) -> Result<(FetchOutcome, WeatherTable), WeatherError> {
        let query = self.request_query(date);

        if let Some(body) = self.cache.lock().get(&query)? {
            tracing::debug!("Serving {} from response cache", date);
            return Ok((FetchOutcome::Full, parse_daily(&body)?));
        }

        let url = format!("{}/v1/archive?{}", self.settings.base_url, query);
        let result = with_retry(&self.settings.retry, || self.client.get(&url).send()).await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => {
                let body = response.text().await?;
                let table = parse_daily(&body)?;
                self.cache.lock().put(&query, &body)?;
                Ok((FetchOutcome::Full, table))
            }
            Ok(response) => {
                tracing::warn!(
                    "Archive returned {} after retries, using fallback dataset",
                    response.status()
                );
                Ok((FetchOutcome::Partial, fallback_table()?))
            }
            Err(e) => {
                tracing::warn!("Archive unreachable ({}), using fallback dataset", e);
                Ok((FetchOutcome::Partial, fallback_table()?))
            }
        }
    }
}

#[derive(Deserialize)]
struct ArchiveResponse {
    daily: serde_json::Map<String, serde_json::Value>,
}

/// Parse a success body into a table.
///
/// Each requested field maps to an array of numbers in the `daily` object;
/// a missing field becomes an empty column, a null value becomes NaN. The
/// `time` array and any unrequested fields are ignored.
fn parse_daily(body: &str) -> Result<WeatherTable, WeatherError> {
    let response: ArchiveResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::Parse(format!("invalid archive body: {e}")))?;

    let mut table = WeatherTable::new();
    for field in DAILY_FIELDS {
        let values = response
            .daily
            .get(field)
            .and_then(serde_json::Value::as_array)
            .map(|vals| {
                vals.iter()
                    .map(|v| v.as_f64().unwrap_or(f64::NAN))
                    .collect()
            })
            .unwrap_or_default();
        table.push_column(field, values);
    }
    Ok(table)
}
