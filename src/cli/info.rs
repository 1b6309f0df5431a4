//! Presets command implementation

use std::process::ExitCode;

use super::EXIT_SUCCESS;
use crate::color::format_color;
use crate::compose::Layout;
use crate::geometry::Orientation;
use crate::presets::PRESETS;

/// List the built-in variant presets with their defaults.
pub fn run_presets() -> ExitCode {
    println!("Built-in presets:");
    for preset in PRESETS {
        let geometry = preset.job.geometry;
        let orientation = match geometry.orientation {
            Orientation::RowMajor => "row-major",
            Orientation::ColumnMajor => "column-major",
        };
        let layout = match preset.job.layout {
            Layout::SideBySide => "side-by-side",
            Layout::Stacked => "stacked",
        };

        println!();
        println!("  {} - {}", preset.name, preset.summary);
        println!(
            "    cells: {}x{} {}, trim {}",
            geometry.cell_width, geometry.cell_height, orientation, geometry.trim_margin
        );
        let border = match preset.job.border_color {
            Some(color) => format_color(color),
            None => "none".to_string(),
        };
        println!(
            "    layout: {}, border: {}, background: {}",
            layout,
            border,
            format_color(preset.job.background_color)
        );
        if preset.job.scrub_original {
            println!("    scrubs the original copy as well");
        }
        if preset.job.exclude_first_cell {
            println!("    excludes the first (reference) cell");
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
