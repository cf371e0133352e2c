//! Rasterization capability consumed by the pipeline.
//!
//! The pipeline never talks to a converter directly; it goes through the
//! [`Rasterizer`] trait so production code can shell out to an external tool
//! while tests substitute an in-process stub.

use std::path::Path;

use thiserror::Error;

/// Smallest supported output size in pixels.
pub const MIN_ICON_SIZE: u32 = 16;
/// Largest supported output size in pixels.
pub const MAX_ICON_SIZE: u32 = 1024;
/// Default output size in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 126;

/// Errors from a [`Rasterizer`] implementation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The converter is missing or unusable. Fatal to the run.
    #[error("rasterizer unavailable: {0}")]
    Unavailable(String),

    /// The requested output size is outside [`MIN_ICON_SIZE`, `MAX_ICON_SIZE`].
    #[error("icon size {0}px is outside the supported range 16-1024px")]
    SizeOutOfRange(u32),

    /// A single asset failed to convert. Recoverable: the pipeline skips the
    /// asset and continues.
    #[error("failed to convert {path}: {message}")]
    Conversion { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts a single vector asset into a raster file at a target pixel size.
///
/// Implementations must be idempotent: the same source asset and size always
/// produce the same output bytes.
pub trait Rasterizer {
    fn rasterize(&self, src: &Path, dest: &Path, size_px: u32) -> Result<(), RenderError>;
}

/// Validate a requested icon size against the supported range.
pub fn check_icon_size(size_px: u32) -> Result<(), RenderError> {
    if (MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size_px) {
        Ok(())
    } else {
        Err(RenderError::SizeOutOfRange(size_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert!(check_icon_size(MIN_ICON_SIZE).is_ok());
        assert!(check_icon_size(DEFAULT_ICON_SIZE).is_ok());
        assert!(check_icon_size(MAX_ICON_SIZE).is_ok());
        assert!(matches!(
            check_icon_size(15),
            Err(RenderError::SizeOutOfRange(15))
        ));
        assert!(matches!(
            check_icon_size(1025),
            Err(RenderError::SizeOutOfRange(1025))
        ));
    }
}
