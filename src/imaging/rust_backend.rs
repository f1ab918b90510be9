//! Production backend built on the `image` crate.
//!
//! Pure Rust, statically linked, no system dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode | `image::ImageReader` with content-based format guessing |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (adaptive filtering) |
//!
//! Format guessing matters here: the tool warns on a non-`.png` extension
//! but still processes the file, so the decoder must not trust the
//! extension either.

use super::backend::{BackendError, IconBackend, SourceImage};
use super::params::{Compression, ResizeParams};
use image::ImageReader;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IconBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let image = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(SourceImage::from_image(image))
    }

    fn resize(&self, source: &SourceImage, params: &ResizeParams) -> Result<(), BackendError> {
        // resize_exact, not resize: the target is always a square and the
        // original tool distorts non-square sources rather than letterboxing.
        let resized = source
            .image
            .resize_exact(params.size, params.size, FilterType::Lanczos3);

        let file = std::fs::File::create(&params.output).map_err(BackendError::Io)?;
        let writer = std::io::BufWriter::new(file);
        let compression = match params.compression {
            Compression::Default => CompressionType::Default,
            Compression::Best => CompressionType::Best,
        };
        let encoder = PngEncoder::new_with_quality(writer, compression, PngFilter::Adaptive);
        resized
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use image::RgbaImage;

    /// Write a small valid PNG with the given dimensions.
    ///
    /// Always encodes PNG regardless of the path's extension; plain `save`
    /// picks the encoder from the extension, and PNG is the only codec
    /// compiled in.
    fn create_test_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn decode_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        create_test_png(&path, 200, 150);

        let backend = RustBackend::new();
        let source = backend.decode(&path).unwrap();
        assert_eq!(
            source.dimensions(),
            Dimensions {
                width: 200,
                height: 150
            }
        );
    }

    #[test]
    fn decode_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.decode(Path::new("/nonexistent/logo.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn decode_garbage_bytes_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let backend = RustBackend::new();
        assert!(backend.decode(&path).is_err());
    }

    #[test]
    fn decode_ignores_wrong_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        // PNG bytes behind a .jpg extension still decode.
        let path = tmp.path().join("logo.jpg");
        create_test_png(&path, 64, 64);

        let backend = RustBackend::new();
        let source = backend.decode(&path).unwrap();
        assert_eq!(source.dimensions().width, 64);
    }

    #[test]
    fn resize_writes_exact_square() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source_path = tmp.path().join("logo.png");
        create_test_png(&source_path, 400, 300);

        let backend = RustBackend::new();
        let source = backend.decode(&source_path).unwrap();
        let output = tmp.path().join("logo_128x128.png");
        backend
            .resize(
                &source,
                &ResizeParams {
                    output: output.clone(),
                    size: 128,
                    compression: Compression::Default,
                },
            )
            .unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (128, 128));
    }

    #[test]
    fn resize_upscales_past_source_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source_path = tmp.path().join("tiny.png");
        create_test_png(&source_path, 16, 16);

        let backend = RustBackend::new();
        let source = backend.decode(&source_path).unwrap();
        let output = tmp.path().join("tiny_256x256.png");
        backend
            .resize(
                &source,
                &ResizeParams {
                    output: output.clone(),
                    size: 256,
                    compression: Compression::Default,
                },
            )
            .unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (256, 256));
    }

    #[test]
    fn resize_best_compression_still_decodes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source_path = tmp.path().join("logo.png");
        create_test_png(&source_path, 100, 100);

        let backend = RustBackend::new();
        let source = backend.decode(&source_path).unwrap();
        let output = tmp.path().join("logo_32x32.png");
        backend
            .resize(
                &source,
                &ResizeParams {
                    output: output.clone(),
                    size: 32,
                    compression: Compression::Best,
                },
            )
            .unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (32, 32));
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }

    #[test]
    fn resize_to_unwritable_path_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source_path = tmp.path().join("logo.png");
        create_test_png(&source_path, 64, 64);

        let backend = RustBackend::new();
        let source = backend.decode(&source_path).unwrap();
        let result = backend.resize(
            &source,
            &ResizeParams {
                output: tmp.path().join("no-such-dir").join("logo_32x32.png"),
                size: 32,
                compression: Compression::Default,
            },
        );
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
