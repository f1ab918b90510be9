//! Image processing backend trait and shared types.
//!
//! The [`IconBackend`] trait defines the two operations every backend must
//! support: decode and resize. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), pure Rust with
//! everything statically linked into the binary.

use super::params::ResizeParams;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Width and height of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A source image decoded once and held for the duration of a run.
///
/// Read-only after construction; every resize samples from the same pixel
/// buffer. Dropping it at the end of the run releases the decode.
pub struct SourceImage {
    pub(crate) image: DynamicImage,
}

impl SourceImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    /// Build a source from an in-memory image. Used by the mock backend and
    /// by tests that want a source without touching the filesystem.
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }
}

/// Trait for icon processing backends.
///
/// Both operations are implemented by every backend so the emit logic stays
/// backend-agnostic and unit-testable with a mock.
pub trait IconBackend {
    /// Decode the source image from disk.
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Resample the source to `size x size` and persist it as a PNG.
    fn resize(&self, source: &SourceImage, params: &ResizeParams) -> Result<(), BackendError>;
}
