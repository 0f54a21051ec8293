//! Reshaping flat model output into bounding boxes.

use serde::{Deserialize, Serialize};

/// Number of boxes produced in the default configuration.
pub const DEFAULT_BOX_COUNT: usize = 1587;

/// A rectangle in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl BoundingBox {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Slice a flat model output into `count` boxes of 4 values each.
///
/// Values are truncated to integers. A window that would run past the end
/// of the output (even partially) becomes a zero box; the result always
/// holds exactly `count` boxes regardless of the output length.
pub fn boxes_from_output(output: &[f64], count: usize) -> Vec<BoundingBox> {
    (0..count)
        .map(|i| {
            let start = i * 4;
            match output.get(start..start + 4) {
                Some(w) => BoundingBox::new(
                    w[0].trunc() as i64,
                    w[1].trunc() as i64,
                    w[2].trunc() as i64,
                    w[3].trunc() as i64,
                ),
                None => BoundingBox::zero(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_output_length() {
        let output = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let boxes = boxes_from_output(&output, 2);

        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0], BoundingBox::new(1, 2, 3, 4));
        assert_eq!(boxes[1], BoundingBox::new(5, 6, 7, 8));
    }

    #[test]
    fn longer_output_is_truncated_to_count() {
        let output = [1.0; 100];
        let boxes = boxes_from_output(&output, 2);
        assert_eq!(boxes.len(), 2);
    }

    #[test]
    fn short_output_pads_with_zero_boxes() {
        let output = [9.0, 9.0, 9.0, 9.0, 1.0, 2.0];
        let boxes = boxes_from_output(&output, 3);

        assert_eq!(boxes.len(), 3);
        assert_eq!(boxes[0], BoundingBox::new(9, 9, 9, 9));
        // Partial window past the end also becomes a zero box.
        assert_eq!(boxes[1], BoundingBox::zero());
        assert_eq!(boxes[2], BoundingBox::zero());
    }

    #[test]
    fn empty_output_is_all_zero_boxes() {
        let boxes = boxes_from_output(&[], 4);
        assert_eq!(boxes.len(), 4);
        assert!(boxes.iter().all(|b| *b == BoundingBox::zero()));
    }

    #[test]
    fn values_are_truncated_not_rounded() {
        let output = [1.9, -1.9, 2.5, 3.999];
        let boxes = boxes_from_output(&output, 1);
        assert_eq!(boxes[0], BoundingBox::new(1, -1, 2, 3));
    }

    #[test]
    fn default_count_is_stable() {
        let boxes = boxes_from_output(&[], DEFAULT_BOX_COUNT);
        assert_eq!(boxes.len(), 1587);
    }
}
