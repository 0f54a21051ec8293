//! Pre-trained regression artifact.
//!
//! The artifact is a JSON file exported from training: a weight matrix of
//! shape `(output_width, input_width)` and an intercept vector of length
//! `output_width`. Evaluation is a single `W·x + b` product.

use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::path::Path;

use crate::error::ModelError;

#[derive(Deserialize)]
struct ArtifactJson {
    input_width: usize,
    weights: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

/// A loaded, shape-validated regression model.
pub struct RegressionArtifact {
    input_width: usize,
    weights: Array2<f64>,
    intercept: Array1<f64>,
}

impl RegressionArtifact {
    /// Load and validate an artifact from disk.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or unparseable files, and on artifacts whose
    /// weight matrix rows disagree with the declared input width or whose
    /// intercept length disagrees with the weight row count.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        let parsed: ArtifactJson = serde_json::from_str(&raw)?;

        let output_width = parsed.weights.len();
        for (i, row) in parsed.weights.iter().enumerate() {
            if row.len() != parsed.input_width {
                return Err(ModelError::Shape(format!(
                    "weight row {} has width {}, declared input width is {}",
                    i,
                    row.len(),
                    parsed.input_width
                )));
            }
        }
        if parsed.intercept.len() != output_width {
            return Err(ModelError::Shape(format!(
                "intercept has length {}, weight matrix has {} rows",
                parsed.intercept.len(),
                output_width
            )));
        }

        let flat: Vec<f64> = parsed.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((output_width, parsed.input_width), flat)
            .map_err(|e| ModelError::Shape(e.to_string()))?;

        tracing::debug!(
            "Loaded regression artifact from {}: {} -> {}",
            path.display(),
            parsed.input_width,
            output_width
        );

        Ok(Self {
            input_width: parsed.input_width,
            weights,
            intercept: Array1::from(parsed.intercept),
        })
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.intercept.len()
    }

    /// Evaluate the model against one feature vector.
    ///
    /// # Errors
    ///
    /// Fails if the feature width does not match the artifact's declared
    /// input width. The flattener upstream performs no validation, so this
    /// is where a weather table that disagrees with the trained model is
    /// caught.
    pub fn predict(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.input_width {
            return Err(ModelError::InputWidth {
                got: features.len(),
                expected: self.input_width,
            });
        }

        let x = Array1::from(features.to_vec());
        let y = self.weights.dot(&x) + &self.intercept;
        Ok(y.to_vec())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn write_artifact(dir: &tempfile::TempDir, value: serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join("model.json");
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn load_and_predict() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            serde_json::json!({
                "input_width": 3,
                "weights": [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]],
                "intercept": [10.0, -1.0],
            }),
        );

        let artifact = RegressionArtifact::load(&path).unwrap();
        assert_eq!(artifact.input_width(), 3);
        assert_eq!(artifact.output_width(), 2);

        let out = artifact.predict(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(out, vec![11.0, 3.0]);
    }

    #[test]
    fn rejects_width_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            serde_json::json!({
                "input_width": 2,
                "weights": [[1.0, 1.0]],
                "intercept": [0.0],
            }),
        );

        let artifact = RegressionArtifact::load(&path).unwrap();
        let err = artifact.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InputWidth {
                got: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn rejects_ragged_weight_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            serde_json::json!({
                "input_width": 2,
                "weights": [[1.0, 1.0], [1.0]],
                "intercept": [0.0, 0.0],
            }),
        );

        assert!(matches!(
            RegressionArtifact::load(&path),
            Err(ModelError::Shape(_))
        ));
    }

    #[test]
    fn rejects_intercept_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(
            &dir,
            serde_json::json!({
                "input_width": 1,
                "weights": [[1.0], [2.0]],
                "intercept": [0.0],
            }),
        );

        assert!(matches!(
            RegressionArtifact::load(&path),
            Err(ModelError::Shape(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RegressionArtifact::load(&dir.path().join("none.json")),
            Err(ModelError::Io(_))
        ));
    }
}
