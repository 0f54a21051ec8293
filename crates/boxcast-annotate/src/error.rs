use std::path::PathBuf;
use thiserror::Error;

/// Annotation errors. Reference and output problems are fatal
/// configuration faults, not per-request conditions.
#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("Failed to load reference image {path}: {source}")]
    Reference {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to read annotated output {path}: {source}")]
    Output {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
