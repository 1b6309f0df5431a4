//! Job configuration - the explicit, immutable configuration object
//!
//! A run is described by a [`RotateJob`] plus a source and destination
//! path. Values are merged from three layers in increasing precedence:
//! built-in preset defaults, an optional TOML job file, and CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgb;
use serde::Deserialize;
use thiserror::Error;

use crate::color::{parse_color, ColorError};
use crate::compose::Layout;
use crate::geometry::{Orientation, SpriteGeometry};
use crate::presets;

/// Configuration loading/merging error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse job file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Bad color string in the file or on the command line
    #[error("invalid {field} '{value}': {source}")]
    Color {
        field: &'static str,
        value: String,
        source: ColorError,
    },
    /// Preset name not found
    #[error("unknown preset '{0}' (run 'spriterot presets' to list them)")]
    UnknownPreset(String),
    /// A required value is missing after merging all layers
    #[error("missing required value: {0}")]
    Missing(&'static str),
}

/// Fully resolved transform parameters, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateJob {
    /// Strip layout of the source
    pub geometry: SpriteGeometry,
    /// Canvas composition policy for the destination
    pub layout: Layout,
    /// Sentinel color scrubbed from output; `None` disables substitution
    pub border_color: Option<Rgb<u8>>,
    /// Canvas fill and substitution color
    pub background_color: Rgb<u8>,
    /// Apply border substitution to the direct copy too, not only the
    /// rotated one
    pub scrub_original: bool,
    /// Treat cell 0 as a non-rotated reference and exclude it from the
    /// output (a quirk of one historical variant, off by default)
    pub exclude_first_cell: bool,
}

/// On-disk TOML job description. Every field is optional; missing values
/// fall back to the preset layer and then to the baseline defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    /// Name of a built-in preset to seed defaults from
    pub preset: Option<String>,
    /// Source strip image
    pub source: Option<PathBuf>,
    /// Destination image
    pub dest: Option<PathBuf>,
    pub cell_width: Option<u32>,
    pub cell_height: Option<u32>,
    pub orientation: Option<Orientation>,
    pub trim_margin: Option<u32>,
    pub layout: Option<Layout>,
    /// Hex string, e.g. `"#808080"`
    pub border_color: Option<String>,
    /// Hex string, e.g. `"#C0C0C0"`
    pub background_color: Option<String>,
    pub scrub_original: Option<bool>,
    pub exclude_first_cell: Option<bool>,
}

impl JobFile {
    /// Load and parse a TOML job file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// CLI arguments that override job-file and preset values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub preset: Option<String>,
    pub source: Option<PathBuf>,
    pub dest: Option<PathBuf>,
    pub cell_width: Option<u32>,
    pub cell_height: Option<u32>,
    pub orientation: Option<Orientation>,
    pub trim_margin: Option<u32>,
    pub layout: Option<Layout>,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    /// Flags accumulate: once enabled by any layer they stay enabled
    pub scrub_original: bool,
    pub exclude_first_cell: bool,
}

/// A resolved run: where to read, where to write, and what to do.
#[derive(Debug, Clone)]
pub struct ResolvedJob {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub job: RotateJob,
}

/// Merge preset defaults, an optional job file and CLI overrides into a
/// runnable job. CLI flags win over file values, file values win over the
/// preset.
pub fn resolve(file: Option<JobFile>, cli: &CliOverrides) -> Result<ResolvedJob, ConfigError> {
    let file = file.unwrap_or_default();

    let preset_name = cli.preset.as_deref().or(file.preset.as_deref());
    let base = match preset_name {
        Some(name) => {
            presets::find(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?.job
        }
        None => baseline(),
    };

    let cell_width = cli
        .cell_width
        .or(file.cell_width)
        .or(nonzero(base.geometry.cell_width))
        .ok_or(ConfigError::Missing("cell-width"))?;
    let cell_height = cli
        .cell_height
        .or(file.cell_height)
        .or(nonzero(base.geometry.cell_height))
        .ok_or(ConfigError::Missing("cell-height"))?;

    let border_color = match cli.border_color.as_deref().or(file.border_color.as_deref()) {
        Some(value) => Some(parse_color(value).map_err(|source| ConfigError::Color {
            field: "border-color",
            value: value.to_string(),
            source,
        })?),
        None => base.border_color,
    };
    let background_color =
        match cli.background_color.as_deref().or(file.background_color.as_deref()) {
            Some(value) => parse_color(value).map_err(|source| ConfigError::Color {
                field: "background-color",
                value: value.to_string(),
                source,
            })?,
            None => base.background_color,
        };

    let job = RotateJob {
        geometry: SpriteGeometry {
            cell_width,
            cell_height,
            orientation: cli
                .orientation
                .or(file.orientation)
                .unwrap_or(base.geometry.orientation),
            trim_margin: cli.trim_margin.or(file.trim_margin).unwrap_or(base.geometry.trim_margin),
        },
        layout: cli.layout.or(file.layout).unwrap_or(base.layout),
        border_color,
        background_color,
        scrub_original: cli.scrub_original
            || file.scrub_original.unwrap_or(base.scrub_original),
        exclude_first_cell: cli.exclude_first_cell
            || file.exclude_first_cell.unwrap_or(base.exclude_first_cell),
    };

    let source = cli
        .source
        .clone()
        .or(file.source)
        .ok_or(ConfigError::Missing("source path"))?;
    let dest = cli.dest.clone().or(file.dest).ok_or(ConfigError::Missing("destination path"))?;

    Ok(ResolvedJob { source, dest, job })
}

/// Defaults used when no preset is named. Cell dimensions have no sensible
/// universal default and stay required.
fn baseline() -> RotateJob {
    RotateJob {
        geometry: SpriteGeometry {
            cell_width: 0,
            cell_height: 0,
            orientation: Orientation::ColumnMajor,
            trim_margin: 0,
        },
        layout: Layout::SideBySide,
        border_color: None,
        background_color: Rgb([0, 0, 0]),
        scrub_original: false,
        exclude_first_cell: false,
    }
}

fn nonzero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}
