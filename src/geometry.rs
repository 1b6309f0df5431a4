//! Sprite strip geometry - cell dimensions, stacking orientation, trim margin
//!
//! A strip holds N fixed-size cells arranged consecutively along one axis.
//! `SpriteGeometry` describes that layout and validates it against the actual
//! dimensions of a loaded image before any pixel work begins.

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Axis along which cells are arranged in the source strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Cells are consecutive along the horizontal axis (one row of cells)
    RowMajor,
    /// Cells are stacked along the vertical axis (one column of cells)
    ColumnMajor,
}

/// Geometry validation failures, all fatal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// The dimension orthogonal to the stacking axis must equal one cell
    #[error("strip is {actual} pixels across, expected exactly one cell ({expected})")]
    OrthogonalMismatch { actual: u32, expected: u32 },

    /// The stacking-axis dimension must divide evenly by the cell size
    #[error("strip length {length} is not a multiple of the cell size {cell}")]
    NotAMultiple { length: u32, cell: u32 },

    /// Trim margin would leave no interior pixels
    #[error("trim margin {margin} too large for {width}x{height} cells")]
    TrimTooLarge { margin: u32, width: u32, height: u32 },

    /// Zero-size cells are meaningless
    #[error("cell dimensions must be non-zero, got {width}x{height}")]
    ZeroCell { width: u32, height: u32 },
}

/// Describes how a sprite strip is laid out.
///
/// Immutable configuration, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteGeometry {
    /// Width of a single cell in pixels
    pub cell_width: u32,
    /// Height of a single cell in pixels
    pub cell_height: u32,
    /// Stacking axis of the strip
    pub orientation: Orientation,
    /// Border pixels excluded from each edge of a cell before rotation
    pub trim_margin: u32,
}

impl SpriteGeometry {
    /// Interior cell width after trimming both edges
    pub fn inner_width(&self) -> u32 {
        self.cell_width - 2 * self.trim_margin
    }

    /// Interior cell height after trimming both edges
    pub fn inner_height(&self) -> u32 {
        self.cell_height - 2 * self.trim_margin
    }

    /// Top-left origin of cell `index` within the source strip
    pub fn cell_origin(&self, index: u32) -> (u32, u32) {
        match self.orientation {
            Orientation::RowMajor => (index * self.cell_width, 0),
            Orientation::ColumnMajor => (0, index * self.cell_height),
        }
    }

    /// Validate this geometry against the source strip dimensions and
    /// derive the cell count.
    ///
    /// The axis orthogonal to the stacking direction must equal exactly one
    /// cell; the stacking-axis dimension must be an exact multiple of the
    /// cell size. A count of zero is legal here - the processor decides
    /// whether an empty strip is an error (it is).
    pub fn validate(&self, strip_width: u32, strip_height: u32) -> Result<u32, GeometryError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(GeometryError::ZeroCell {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        // Overflow-free form of `2 * trim_margin >= min(cell_width, cell_height)`
        if self.trim_margin >= self.cell_width.min(self.cell_height).div_ceil(2) {
            return Err(GeometryError::TrimTooLarge {
                margin: self.trim_margin,
                width: self.cell_width,
                height: self.cell_height,
            });
        }

        let (across, along, cell_along) = match self.orientation {
            Orientation::RowMajor => (strip_height, strip_width, self.cell_width),
            Orientation::ColumnMajor => (strip_width, strip_height, self.cell_height),
        };
        let cell_across = match self.orientation {
            Orientation::RowMajor => self.cell_height,
            Orientation::ColumnMajor => self.cell_width,
        };

        if across != cell_across {
            return Err(GeometryError::OrthogonalMismatch {
                actual: across,
                expected: cell_across,
            });
        }
        if along % cell_along != 0 {
            return Err(GeometryError::NotAMultiple { length: along, cell: cell_along });
        }

        Ok(along / cell_along)
    }
}
