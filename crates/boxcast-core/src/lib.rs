//! Core orchestration for boxcast.
//!
//! Owns configuration, the top-level error type, and the coordinator that
//! runs the prediction pipeline: weather fetch, feature flattening, model
//! inference, image annotation, and output read-back.

pub mod config;
pub mod coordinator;
pub mod error;

pub use boxcast_annotate::OUTPUT_FILE;
pub use config::{ArchiveConfig, Config, PathsConfig, PredictorConfig};
pub use coordinator::{Coordinator, Prediction};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize logging for the process.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("boxcast core initialized");
    Ok(())
}
