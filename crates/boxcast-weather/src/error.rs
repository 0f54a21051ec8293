use thiserror::Error;

/// Weather subsystem errors.
///
/// Remote unavailability is not represented here: the client degrades to
/// the fallback dataset instead of failing. These variants cover faults
/// that cannot be degraded away.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] rusqlite::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Fallback dataset error: {0}")]
    Fallback(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
