//! Built-in variant presets
//!
//! The tool grew out of four near-identical one-off scripts, each with its
//! own hard-coded constants. Those constants survive here as named presets
//! that seed the job configuration; any field can still be overridden by a
//! job file or CLI flag.

use image::Rgb;

use crate::compose::Layout;
use crate::config::RotateJob;
use crate::geometry::{Orientation, SpriteGeometry};

/// A named bundle of variant defaults
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub summary: &'static str,
    pub job: RotateJob,
}

/// The four known use cases.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "leds",
        summary: "LED indicator column, original and rotated side by side",
        job: RotateJob {
            geometry: SpriteGeometry {
                cell_width: 13,
                cell_height: 23,
                orientation: Orientation::ColumnMajor,
                trim_margin: 0,
            },
            layout: Layout::SideBySide,
            border_color: None,
            background_color: Rgb([0, 0, 0]),
            scrub_original: false,
            exclude_first_cell: false,
        },
    },
    Preset {
        name: "font",
        summary: "Glyph row for vertical text rendering",
        job: RotateJob {
            geometry: SpriteGeometry {
                cell_width: 7,
                cell_height: 9,
                orientation: Orientation::RowMajor,
                trim_margin: 0,
            },
            layout: Layout::Stacked,
            border_color: None,
            background_color: Rgb([255, 255, 255]),
            scrub_original: false,
            exclude_first_cell: false,
        },
    },
    Preset {
        name: "smileys",
        summary: "Bordered smiley column; scrubs the border and skips the reference cell",
        job: RotateJob {
            geometry: SpriteGeometry {
                cell_width: 24,
                cell_height: 24,
                orientation: Orientation::ColumnMajor,
                trim_margin: 1,
            },
            layout: Layout::SideBySide,
            border_color: Some(Rgb([128, 128, 128])),
            background_color: Rgb([192, 192, 192]),
            scrub_original: true,
            exclude_first_cell: true,
        },
    },
    Preset {
        name: "tiles",
        summary: "Bordered tile column, borders scrubbed from the rotated copy only",
        job: RotateJob {
            geometry: SpriteGeometry {
                cell_width: 16,
                cell_height: 16,
                orientation: Orientation::ColumnMajor,
                trim_margin: 1,
            },
            layout: Layout::Stacked,
            border_color: Some(Rgb([128, 128, 128])),
            background_color: Rgb([192, 192, 192]),
            scrub_original: false,
            exclude_first_cell: false,
        },
    },
];

/// Look up a preset by name (case-sensitive).
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
