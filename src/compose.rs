//! Canvas composition - allocates the destination buffer and places cells
//!
//! Two layout policies pair each original cell with its rotated copy:
//! side-by-side (originals in a left column, rotated copies to their right)
//! and stacked (originals in a top band, rotated copies beneath). The whole
//! canvas is pre-filled with the background color before any cell is
//! written, and no two placements overlap.

use clap::ValueEnum;
use image::{Rgb, RgbImage};
use serde::Deserialize;

use crate::geometry::SpriteGeometry;
use crate::rotate::rotated_dims;

/// Canvas composition policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Row per cell: original in the left half, rotated copy in the right
    SideBySide,
    /// Band per variant: originals across the top, rotated copies below
    Stacked,
}

/// Destination canvas under construction.
///
/// Owns the destination buffer from allocation until `into_image`. Slots are
/// indexed 0..n and are disjoint by construction; cells never read back
/// already-written pixels.
#[derive(Debug)]
pub struct Canvas {
    image: RgbImage,
    layout: Layout,
    inner_w: u32,
    inner_h: u32,
    /// Per-slot advance along the layout axis. Using the larger of the two
    /// cell dimensions keeps originals and rotated copies aligned per slot
    /// even for non-square cells; for square cells this is exactly the cell
    /// size.
    pitch: u32,
}

impl Canvas {
    /// Allocate a canvas for `slots` cells, pre-filled with `background`.
    pub fn new(geometry: &SpriteGeometry, layout: Layout, slots: u32, background: Rgb<u8>) -> Self {
        let inner_w = geometry.inner_width();
        let inner_h = geometry.inner_height();
        let (rot_w, rot_h) = rotated_dims(geometry);
        let pitch = inner_w.max(inner_h);

        let (width, height) = match layout {
            Layout::SideBySide => (inner_w + rot_w, slots * pitch),
            Layout::Stacked => (slots * pitch, inner_h + rot_h),
        };

        Canvas {
            image: RgbImage::from_pixel(width, height, background),
            layout,
            inner_w,
            inner_h,
            pitch,
        }
    }

    /// Top-left corner of the original copy for `slot`
    pub fn original_origin(&self, slot: u32) -> (u32, u32) {
        match self.layout {
            Layout::SideBySide => (0, slot * self.pitch),
            Layout::Stacked => (slot * self.pitch, 0),
        }
    }

    /// Top-left corner of the rotated copy for `slot`
    pub fn rotated_origin(&self, slot: u32) -> (u32, u32) {
        match self.layout {
            Layout::SideBySide => (self.inner_w, slot * self.pitch),
            Layout::Stacked => (slot * self.pitch, self.inner_h),
        }
    }

    /// Place the original (possibly scrubbed) copy of a cell
    pub fn place_original(&mut self, slot: u32, cell: &RgbImage) {
        let origin = self.original_origin(slot);
        self.blit(origin, cell);
    }

    /// Place the rotated copy of a cell
    pub fn place_rotated(&mut self, slot: u32, cell: &RgbImage) {
        let origin = self.rotated_origin(slot);
        self.blit(origin, cell);
    }

    /// Hand the finished buffer to the caller
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn blit(&mut self, origin: (u32, u32), cell: &RgbImage) {
        for y in 0..cell.height() {
            for x in 0..cell.width() {
                self.image.put_pixel(origin.0 + x, origin.1 + y, *cell.get_pixel(x, y));
            }
        }
    }
}
