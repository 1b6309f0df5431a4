//! Strip processing - validation, per-cell iteration, composition
//!
//! `process` is the single entry point of the transform: it validates the
//! configured geometry against the loaded strip, runs the rotation transform
//! over every cell and delegates placement to the canvas compositor. One
//! deterministic pass, no retries, no partial output.

use std::path::PathBuf;

use image::RgbImage;
use thiserror::Error;

use crate::compose::{Canvas, Layout};
use crate::config::RotateJob;
use crate::geometry::GeometryError;
use crate::rotate::{extract_cell, rotate_cell, ColorPolicy};

/// Fatal processing failures. All abort the run; no destination file is
/// ever written after any of these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StripError {
    /// Source file missing, unreadable or undecodable
    #[error("cannot read source image '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Strip dimensions do not match the configured cell geometry
    #[error("invalid strip geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// The strip holds no cells to rotate
    #[error("strip contains no cells to rotate")]
    EmptyStrip,

    /// Destination encode/write failed
    #[error("cannot write destination image '{}': {source}", path.display())]
    DestinationWriteFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Transform a source strip into the paired original+rotated canvas.
///
/// Validation happens up front: the strip must be exactly one cell across
/// its orthogonal axis and an exact multiple of the cell size along the
/// stacking axis. With `exclude_first_cell` the first cell is treated as a
/// non-rotated reference and skipped; a strip left with zero cells is an
/// [`StripError::EmptyStrip`].
///
/// # Examples
///
/// ```
/// use image::{Rgb, RgbImage};
/// use spriterot::config::RotateJob;
/// use spriterot::compose::Layout;
/// use spriterot::geometry::{Orientation, SpriteGeometry};
/// use spriterot::processor::process;
///
/// let strip = RgbImage::from_pixel(4, 8, Rgb([10, 20, 30]));
/// let job = RotateJob {
///     geometry: SpriteGeometry {
///         cell_width: 4,
///         cell_height: 4,
///         orientation: Orientation::ColumnMajor,
///         trim_margin: 0,
///     },
///     layout: Layout::SideBySide,
///     border_color: None,
///     background_color: Rgb([0, 0, 0]),
///     scrub_original: false,
///     exclude_first_cell: false,
/// };
/// let dest = process(&strip, &job).unwrap();
/// assert_eq!(dest.dimensions(), (8, 8));
/// ```
pub fn process(source: &RgbImage, job: &RotateJob) -> Result<RgbImage, StripError> {
    let cell_count = job.geometry.validate(source.width(), source.height())?;
    let first = if job.exclude_first_cell { 1 } else { 0 };
    let slots = cell_count.saturating_sub(first);
    if slots == 0 {
        return Err(StripError::EmptyStrip);
    }

    let policy = ColorPolicy { border: job.border_color, background: job.background_color };
    let mut canvas = Canvas::new(&job.geometry, job.layout, slots, job.background_color);

    for cell in first..cell_count {
        let origin = job.geometry.cell_origin(cell);
        let original = extract_cell(source, origin, &job.geometry, &policy, job.scrub_original);
        let rotated = rotate_cell(source, origin, &job.geometry, &policy);

        let slot = cell - first;
        canvas.place_original(slot, &original);
        canvas.place_rotated(slot, &rotated);
    }

    Ok(canvas.into_image())
}

/// Dimensions of the destination canvas for `job` applied to a strip with
/// the given dimensions, without doing any pixel work.
///
/// Used by the CLI summary line; fails with the same errors as [`process`].
pub fn destination_dims(
    strip_width: u32,
    strip_height: u32,
    job: &RotateJob,
) -> Result<(u32, u32, u32), StripError> {
    let cell_count = job.geometry.validate(strip_width, strip_height)?;
    let first = if job.exclude_first_cell { 1 } else { 0 };
    let slots = cell_count.saturating_sub(first);
    if slots == 0 {
        return Err(StripError::EmptyStrip);
    }

    let inner_w = job.geometry.inner_width();
    let inner_h = job.geometry.inner_height();
    let pitch = inner_w.max(inner_h);
    let (w, h) = match job.layout {
        Layout::SideBySide => (inner_w + inner_h, slots * pitch),
        Layout::Stacked => (slots * pitch, inner_h + inner_w),
    };
    Ok((w, h, slots))
}
