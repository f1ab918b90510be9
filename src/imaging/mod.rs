//! Icon image processing: decode, square resample, PNG encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format guessed from content) |
//! | **Resize** | Lanczos3 `resize_exact` |
//! | **Encode → PNG** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing resize operations
//! - **Backend**: [`IconBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, IconBackend, SourceImage};
pub use params::{Compression, ResizeParams};
pub use rust_backend::RustBackend;
