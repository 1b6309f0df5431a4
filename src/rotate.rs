//! The rotation transform - pure pixel remapping for a single cell
//!
//! Maps the trimmed interior of a source cell into a quarter-turned
//! destination grid, applying the border-color substitution policy on the
//! way. No I/O and no observable failure: callers validate geometry first,
//! so out-of-range coordinates here are a programming error.

use image::{Rgb, RgbImage};

use crate::geometry::SpriteGeometry;

/// Border/background color substitution rules, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPolicy {
    /// Sentinel color marking decorative border pixels; `None` disables
    /// substitution entirely.
    pub border: Option<Rgb<u8>>,
    /// Fill color substituted for border pixels and used for the canvas
    /// pre-fill.
    pub background: Rgb<u8>,
}

impl ColorPolicy {
    /// Apply the substitution rule to one pixel.
    ///
    /// Equality with the border sentinel is an exact channel-wise match.
    pub fn sanitize(&self, pixel: Rgb<u8>) -> Rgb<u8> {
        match self.border {
            Some(border) if pixel == border => self.background,
            _ => pixel,
        }
    }
}

/// Destination dimensions of a rotated cell: width and height swap.
pub fn rotated_dims(geometry: &SpriteGeometry) -> (u32, u32) {
    (geometry.inner_height(), geometry.inner_width())
}

/// Destination coordinate of interior pixel `(x, y)` after a quarter turn.
///
/// `inner_w` is the trimmed cell width. For square interiors four
/// applications compose to the identity; for non-square cells the same
/// mapping acts as a transpose-style remap into an `inner_h x inner_w`
/// destination.
pub fn rotated_coords(x: u32, y: u32, inner_w: u32) -> (u32, u32) {
    (y, inner_w - 1 - x)
}

/// Produce the rotated copy of one cell.
///
/// `origin` is the top-left corner of the cell within the source strip.
/// Every interior pixel is sanitized through `policy` and written exactly
/// once; the returned buffer is `inner_h x inner_w` (axes swapped).
pub fn rotate_cell(
    source: &RgbImage,
    origin: (u32, u32),
    geometry: &SpriteGeometry,
    policy: &ColorPolicy,
) -> RgbImage {
    let inner_w = geometry.inner_width();
    let inner_h = geometry.inner_height();
    let trim = geometry.trim_margin;

    let mut rotated = RgbImage::new(inner_h, inner_w);
    for y in 0..inner_h {
        for x in 0..inner_w {
            let pixel = *source.get_pixel(origin.0 + trim + x, origin.1 + trim + y);
            let (rx, ry) = rotated_coords(x, y, inner_w);
            rotated.put_pixel(rx, ry, policy.sanitize(pixel));
        }
    }
    rotated
}

/// Extract the trimmed interior of one cell without rotation.
///
/// When `scrub` is set the border substitution is applied to the direct
/// copy too; otherwise the original pixels pass through verbatim.
pub fn extract_cell(
    source: &RgbImage,
    origin: (u32, u32),
    geometry: &SpriteGeometry,
    policy: &ColorPolicy,
    scrub: bool,
) -> RgbImage {
    let inner_w = geometry.inner_width();
    let inner_h = geometry.inner_height();
    let trim = geometry.trim_margin;

    let mut cell = RgbImage::new(inner_w, inner_h);
    for y in 0..inner_h {
        for x in 0..inner_w {
            let pixel = *source.get_pixel(origin.0 + trim + x, origin.1 + trim + y);
            let pixel = if scrub { policy.sanitize(pixel) } else { pixel };
            cell.put_pixel(x, y, pixel);
        }
    }
    cell
}
