//! Centralized error types for boxcast.
//!
//! Degraded weather service is not an error: the pipeline returns a
//! `Partial` prediction instead. Everything here represents an
//! unrecoverable setup fault or an I/O failure the caller must see.

use std::path::PathBuf;
use thiserror::Error;

use boxcast_annotate::AnnotateError;
use boxcast_model::ModelError;
use boxcast_weather::WeatherError;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Annotation error: {0}")]
    Annotate(#[from] AnnotateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// A message suitable for display in the dashboard UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(_) => "Weather data could not be processed. Check the cache path.",
            AppError::Model(_) => "The prediction model is missing or invalid. Check the model path.",
            AppError::Annotate(_) => "The annotated image could not be produced. Check the image paths.",
            AppError::Config(_) => "Invalid configuration. Check your settings file.",
            AppError::Io(_) => "A file operation failed. Please try again.",
        }
    }
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_actionable() {
        let err = AppError::Model(ModelError::Shape("bad".into()));
        assert!(err.user_message().contains("model"));

        let err = AppError::Io(std::io::Error::other("disk"));
        assert!(!err.user_message().is_empty());
    }
}
