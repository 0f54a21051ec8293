//! Image annotation for boxcast.
//!
//! Draws predicted bounding boxes onto a copy of the reference image and
//! persists the result to a fixed filename inside the output directory.

pub mod draw;
pub mod error;

pub use error::AnnotateError;

use image::{DynamicImage, Rgba};
use std::path::{Path, PathBuf};

use boxcast_model::BoundingBox;
use draw::draw_box_outline;

/// Fixed output filename, unconditionally overwritten each call.
pub const OUTPUT_FILE: &str = "annotated.png";

/// Draws box outlines with a configurable color and line width.
#[derive(Debug, Clone)]
pub struct Annotator {
    pub color: Rgba<u8>,
    pub thickness: u32,
}

impl Default for Annotator {
    fn default() -> Self {
        Self {
            color: Rgba([0, 255, 0, 255]),
            thickness: 2,
        }
    }
}

impl Annotator {
    /// Load the reference image, draw every box onto a copy, and write the
    /// result to `output_dir/annotated.png`, creating the directory if
    /// absent. Returns the written path.
    ///
    /// The reference image on disk (and any previously loaded copy of it)
    /// is never mutated; drawing happens on an owned pixel buffer.
    ///
    /// # Errors
    ///
    /// A missing or unreadable reference image, an uncreatable output
    /// directory, or a failed write are all reported to the caller; there
    /// is no silent no-output path.
    pub fn annotate(
        &self,
        reference_path: &Path,
        boxes: &[BoundingBox],
        output_dir: &Path,
    ) -> Result<PathBuf, AnnotateError> {
        let reference = image::open(reference_path).map_err(|e| AnnotateError::Reference {
            path: reference_path.to_path_buf(),
            source: e,
        })?;

        let mut canvas = reference.to_rgba8();
        for b in boxes {
            draw_box_outline(&mut canvas, b, self.color, self.thickness);
        }

        std::fs::create_dir_all(output_dir)?;
        let output_path = output_dir.join(OUTPUT_FILE);
        canvas.save(&output_path)?;

        tracing::info!(
            "Annotated {} boxes onto {}",
            boxes.len(),
            output_path.display()
        );
        Ok(output_path)
    }
}

/// Freshly load a written annotation from disk.
///
/// The coordinator hands its caller this re-read image rather than the
/// in-memory canvas, so the returned object always reflects the file that
/// was just written and never aliases the reference image.
///
/// # Errors
///
/// Fails if the file is missing or not a decodable image.
pub fn read_back(path: &Path) -> Result<DynamicImage, AnnotateError> {
    image::open(path).map_err(|e| AnnotateError::Output {
        path: path.to_path_buf(),
        source: e,
    })
}
