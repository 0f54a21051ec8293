//! Bounding-box prediction for boxcast.
//!
//! Loads a pre-trained linear-regression artifact from disk, evaluates it
//! against a flattened weather feature vector, and reshapes the flat output
//! into a fixed number of pixel-space bounding boxes.

pub mod artifact;
pub mod boxes;
pub mod error;
pub mod features;

pub use artifact::RegressionArtifact;
pub use boxes::{boxes_from_output, BoundingBox, DEFAULT_BOX_COUNT};
pub use error::ModelError;
pub use features::flatten;

use std::path::Path;

/// Run the full prediction step: load the artifact, evaluate it against
/// the feature vector, and reshape the output into exactly `count` boxes.
///
/// The artifact is loaded fresh on every call. Loading is cheap relative
/// to the surrounding network and image I/O; a process-wide cache would be
/// a correctness-neutral optimization.
///
/// # Errors
///
/// Fails if the artifact is missing or malformed, or if the feature vector
/// width does not match the artifact's declared input width. A model output
/// shorter than `count * 4` is not an error; missing windows become
/// `(0, 0, 0, 0)` boxes.
pub fn predict_bounding_boxes(
    artifact_path: &Path,
    features: &[f64],
    count: usize,
) -> Result<Vec<BoundingBox>, ModelError> {
    let artifact = RegressionArtifact::load(artifact_path)?;
    let output = artifact.predict(features)?;
    Ok(boxes_from_output(&output, count))
}
