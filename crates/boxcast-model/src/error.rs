use thiserror::Error;

/// Prediction errors. All of these indicate a broken deployment (missing
/// or corrupt artifact, or a feature pipeline that disagrees with the
/// artifact), never a per-request condition.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed artifact: {0}")]
    Shape(String),

    #[error("Feature vector has width {got}, artifact expects {expected}")]
    InputWidth { got: usize, expected: usize },
}
