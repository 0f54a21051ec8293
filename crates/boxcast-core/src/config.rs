//! Process configuration: archive endpoint, retry knobs, and the fixed
//! filesystem paths the pipeline reads and writes.
//!
//! Every field has a default, so an absent config file yields a fully
//! working configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use boxcast_model::DEFAULT_BOX_COUNT;
use boxcast_weather::types::{ARCHIVE_API_BASE, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use boxcast_weather::{ArchiveSettings, RetryConfig};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Weather archive settings
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Filesystem paths used by the pipeline
    #[serde(default)]
    pub paths: PathsConfig,

    /// Predictor settings
    #[serde(default)]
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Base URL of the archive service (overridable for tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Query coordinate
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds (doubles per attempt)
    #[serde(default = "default_retry_initial_ms")]
    pub retry_initial_ms: u64,

    /// Backoff delay cap in milliseconds
    #[serde(default = "default_retry_max_ms")]
    pub retry_max_ms: u64,
}

fn default_base_url() -> String {
    ARCHIVE_API_BASE.to_string()
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_max_retries() -> u32 {
    boxcast_weather::retry::DEFAULT_MAX_RETRIES
}

fn default_retry_initial_ms() -> u64 {
    boxcast_weather::retry::DEFAULT_INITIAL_DELAY_MS
}

fn default_retry_max_ms() -> u64 {
    boxcast_weather::retry::DEFAULT_MAX_DELAY_MS
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            max_retries: default_max_retries(),
            retry_initial_ms: default_retry_initial_ms(),
            retry_max_ms: default_retry_max_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Persistent HTTP response cache database
    #[serde(default = "default_cache_db")]
    pub cache_db: PathBuf,

    /// Pre-trained regression artifact
    #[serde(default = "default_model_artifact")]
    pub model_artifact: PathBuf,

    /// Reference image the boxes are drawn onto
    #[serde(default = "default_reference_image")]
    pub reference_image: PathBuf,

    /// Directory the annotated image is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_cache_db() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("boxcast").join("http_cache.db"))
        .unwrap_or_else(|| PathBuf::from("http_cache.db"))
}

fn default_model_artifact() -> PathBuf {
    PathBuf::from("assets/regression.json")
}

fn default_reference_image() -> PathBuf {
    PathBuf::from("assets/reference.png")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_db: default_cache_db(),
            model_artifact: default_model_artifact(),
            reference_image: default_reference_image(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Number of bounding boxes the pipeline always produces
    #[serde(default = "default_box_count")]
    pub box_count: usize,
}

fn default_box_count() -> usize {
    DEFAULT_BOX_COUNT
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            box_count: default_box_count(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist. A present-but-broken file is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("boxcast").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Map the archive section onto client settings.
    pub fn archive_settings(&self) -> ArchiveSettings {
        ArchiveSettings {
            base_url: self.archive.base_url.clone(),
            latitude: self.archive.latitude,
            longitude: self.archive.longitude,
            cache_path: self.paths.cache_db.clone(),
            retry: RetryConfig::new(
                self.archive.max_retries,
                self.archive.retry_initial_ms,
                self.archive.retry_max_ms,
            ),
        }
    }
}
