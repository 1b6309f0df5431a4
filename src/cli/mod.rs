//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod info;
mod rotate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::compose::Layout;
use crate::geometry::Orientation;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Spriterot - pair every cell of a sprite strip with its 90°-rotated copy
#[derive(Parser)]
#[command(name = "spriterot")]
#[command(about = "Spriterot - pair every cell of a sprite strip with its 90°-rotated copy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rotate a sprite strip and write the paired canvas to a PNG
    Rotate {
        /// Source strip image (may instead come from --config or a preset)
        source: Option<PathBuf>,

        /// Destination image path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML job file supplying any of the options below
        #[arg(long)]
        config: Option<PathBuf>,

        /// Built-in preset seeding the defaults (see 'spriterot presets')
        #[arg(short, long)]
        preset: Option<String>,

        /// Width of a single cell in pixels
        #[arg(long)]
        cell_width: Option<u32>,

        /// Height of a single cell in pixels
        #[arg(long)]
        cell_height: Option<u32>,

        /// Axis along which cells are arranged in the source
        #[arg(long, value_enum)]
        orientation: Option<Orientation>,

        /// Destination canvas layout
        #[arg(long, value_enum)]
        layout: Option<Layout>,

        /// Border pixels excluded from each cell edge before rotation
        #[arg(long)]
        trim_margin: Option<u32>,

        /// Sentinel color to scrub from output, e.g. '#808080'
        #[arg(long)]
        border_color: Option<String>,

        /// Canvas fill and substitution color, e.g. '#C0C0C0'
        #[arg(long)]
        background_color: Option<String>,

        /// Also scrub the border color from the non-rotated copy
        #[arg(long)]
        scrub_original: bool,

        /// Treat cell 0 as a reference cell and exclude it from the output
        #[arg(long)]
        exclude_first_cell: bool,
    },
    /// List built-in variant presets
    Presets,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rotate {
            source,
            output,
            config,
            preset,
            cell_width,
            cell_height,
            orientation,
            layout,
            trim_margin,
            border_color,
            background_color,
            scrub_original,
            exclude_first_cell,
        } => rotate::run_rotate(
            config.as_deref(),
            crate::config::CliOverrides {
                preset,
                source,
                dest: output,
                cell_width,
                cell_height,
                orientation,
                trim_margin,
                layout,
                border_color,
                background_color,
                scrub_original,
                exclude_first_cell,
            },
        ),
        Commands::Presets => info::run_presets(),
    }
}
