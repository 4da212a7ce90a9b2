//! Rounded-canvas compositing for macOS-style icons.
//!
//! macOS launcher icons are inset on a transparent canvas and clipped to a
//! rounded rectangle. The mask is computed per pixel against the inset
//! region; the `image` crate carries no vector drawing primitives.

use image::{RgbaImage, imageops};

/// Paste `inset` onto a transparent `canvas_size` square at
/// (`padding`, `padding`) and clip it to a rounded rectangle.
///
/// The mask covers exactly the inset region `[padding, canvas_size - padding)`
/// with corner radius `(canvas_size - 2 * padding) * corner_ratio`, and it
/// replaces the canvas alpha channel: pixels outside the mask are fully
/// transparent, pixels inside are fully opaque.
///
/// `inset` is expected to be `(canvas_size - 2 * padding)` square; smaller
/// images are still composited but leave transparent slack inside the mask.
pub fn round_corners_centered(
    inset: RgbaImage,
    canvas_size: u32,
    padding: u32,
    corner_ratio: f64,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    imageops::overlay(&mut canvas, &inset, i64::from(padding), i64::from(padding));

    let display = canvas_size.saturating_sub(2 * padding);
    // Radius cannot exceed half the display region or the corner arcs overlap
    let radius = ((f64::from(display) * corner_ratio) as u32).min(display / 2);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        pixel[3] = if inside_rounded_rect(x, y, canvas_size, padding, radius) {
            u8::MAX
        } else {
            0
        };
    }

    canvas
}

/// Whether pixel (x, y) lies within the rounded inset rectangle.
fn inside_rounded_rect(x: u32, y: u32, canvas_size: u32, padding: u32, radius: u32) -> bool {
    let x0 = i64::from(padding);
    let y0 = i64::from(padding);
    // Inclusive far edge of the inset region
    let x1 = i64::from(canvas_size) - i64::from(padding) - 1;
    let y1 = x1;

    let x = i64::from(x);
    let y = i64::from(y);
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }

    let r = i64::from(radius);
    if r == 0 {
        return true;
    }

    // Only pixels inside a corner square are subject to the arc test
    let cx = if x < x0 + r {
        x0 + r
    } else if x > x1 - r {
        x1 - r
    } else {
        return true;
    };
    let cy = if y < y0 + r {
        y0 + r
    } else if y > y1 - r {
        y1 - r
    } else {
        return true;
    };

    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}
