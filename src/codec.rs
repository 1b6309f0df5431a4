//! Image codec seam - the external decode/encode capability
//!
//! The core transform never touches the filesystem; it consumes and
//! produces in-memory buffers. This trait is the seam to the outside world,
//! with a PNG-backed implementation on the `image` crate. Tests substitute
//! their own codec where convenient.

use std::path::Path;

use image::RgbImage;

use crate::processor::StripError;

/// Decode/encode capability consumed by the CLI layer.
pub trait ImageCodec {
    /// Load a rectangular RGB pixel buffer from `path`.
    fn load(&self, path: &Path) -> Result<RgbImage, StripError>;

    /// Encode `image` to `path` in a lossless raster format.
    fn save(&self, path: &Path, image: &RgbImage) -> Result<(), StripError>;
}

/// PNG codec backed by the `image` crate.
///
/// Any alpha channel in the source is discarded on load; the transform is
/// RGB-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn load(&self, path: &Path) -> Result<RgbImage, StripError> {
        let image = image::open(path).map_err(|source| StripError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(image.to_rgb8())
    }

    fn save(&self, path: &Path, image: &RgbImage) -> Result<(), StripError> {
        image.save(path).map_err(|source| StripError::DestinationWriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}
