//! The prediction pipeline.
//!
//! Strictly linear and per-call: weather fetch, flatten, model inference,
//! annotation, output read-back. The only state threaded through is the
//! fetch outcome tag and the image itself.

use chrono::NaiveDate;
use image::DynamicImage;
use tracing::instrument;

use boxcast_annotate::{read_back, Annotator};
use boxcast_model::{flatten, predict_bounding_boxes};
use boxcast_weather::{ArchiveClient, FetchOutcome};

use crate::config::Config;
use crate::error::AppError;

/// A completed prediction, tagged by whether live weather data (`Full`) or
/// the fallback dataset (`Partial`) fed the model. Both variants carry the
/// annotated image as re-read from the output file.
#[derive(Debug)]
pub enum Prediction {
    Full { image: DynamicImage },
    Partial { image: DynamicImage },
}

impl Prediction {
    pub fn is_full(&self) -> bool {
        matches!(self, Prediction::Full { .. })
    }

    pub fn image(&self) -> &DynamicImage {
        match self {
            Prediction::Full { image } | Prediction::Partial { image } => image,
        }
    }

    pub fn into_image(self) -> DynamicImage {
        match self {
            Prediction::Full { image } | Prediction::Partial { image } => image,
        }
    }
}

/// Owns the weather client (and with it the response cache connection) and
/// the configured paths. Built once at startup and shared by reference
/// with whatever surface accepts prediction requests.
pub struct Coordinator {
    config: Config,
    weather: ArchiveClient,
    annotator: Annotator,
}

impl Coordinator {
    /// Build the coordinator and its process-wide resources.
    ///
    /// # Errors
    ///
    /// Fails if the response cache database cannot be opened.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let weather = ArchiveClient::new(config.archive_settings())?;
        Ok(Self {
            config,
            weather,
            annotator: Annotator::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full prediction for a date.
    ///
    /// The outcome tag reflects only the weather fetch: a degraded fetch
    /// still produces a usable `Partial` prediction from the fallback
    /// dataset, and flattening happens on whichever table was returned.
    /// Setup faults (missing model artifact or reference image, unwritable
    /// output) are returned as errors rather than silently producing no
    /// output file.
    #[instrument(skip(self), level = "info")]
    pub async fn predict(&self, date: NaiveDate) -> Result<Prediction, AppError> {
        let (outcome, table) = self.weather.fetch_daily(date).await?;

        let features = flatten(&table);
        let boxes = predict_bounding_boxes(
            &self.config.paths.model_artifact,
            &features,
            self.config.predictor.box_count,
        )?;

        let written = self.annotator.annotate(
            &self.config.paths.reference_image,
            &boxes,
            &self.config.paths.output_dir,
        )?;
        let image = read_back(&written)?;

        tracing::info!(
            "Prediction for {} complete: {:?}, {} boxes",
            date,
            outcome,
            boxes.len()
        );

        Ok(match outcome {
            FetchOutcome::Full => Prediction::Full { image },
            FetchOutcome::Partial => Prediction::Partial { image },
        })
    }
}
