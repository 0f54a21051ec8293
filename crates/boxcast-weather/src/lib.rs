//! Historical weather access for boxcast.
//!
//! Provides a client for the weather-archive API with a persistent response
//! cache, bounded retry for transient failures, and a bundled fallback
//! dataset for when the remote service is unreachable.

pub mod cache;
pub mod client;
pub mod error;
pub mod fallback;
pub mod retry;
pub mod types;

pub use cache::ResponseCache;
pub use client::ArchiveClient;
pub use error::WeatherError;
pub use fallback::fallback_table;
pub use retry::RetryConfig;
pub use types::{ArchiveSettings, Column, FetchOutcome, WeatherTable, DAILY_FIELDS};
