//! Rectangle outline drawing on raw pixel buffers.

use image::{Rgba, RgbaImage};

use boxcast_model::BoundingBox;

/// Draw the outline of `b` from `(x, y)` to `(x + w, y + h)`, `thickness`
/// pixels wide, inset into the rectangle. Edges outside the canvas are
/// clipped; degenerate rectangles (negative width or height) draw nothing.
pub fn draw_box_outline(canvas: &mut RgbaImage, b: &BoundingBox, color: Rgba<u8>, thickness: u32) {
    let (x0, y0) = (b.x, b.y);
    let (x1, y1) = (b.x + b.width, b.y + b.height);
    if x1 < x0 || y1 < y0 {
        return;
    }

    for t in 0..i64::from(thickness) {
        horizontal_line(canvas, x0, x1, y0 + t, color);
        horizontal_line(canvas, x0, x1, y1 - t, color);
        vertical_line(canvas, y0, y1, x0 + t, color);
        vertical_line(canvas, y0, y1, x1 - t, color);
    }
}

fn horizontal_line(canvas: &mut RgbaImage, x0: i64, x1: i64, y: i64, color: Rgba<u8>) {
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    if y < 0 || y >= h {
        return;
    }
    let start = x0.max(0);
    let end = x1.min(w - 1);
    for x in start..=end {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn vertical_line(canvas: &mut RgbaImage, y0: i64, y1: i64, x: i64, color: Rgba<u8>) {
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    if x < 0 || x >= w {
        return;
    }
    let start = y0.max(0);
    let end = y1.min(h - 1);
    for y in start..=end {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}
