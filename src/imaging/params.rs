//! Parameter types for icon resize operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`emit`](crate::emit) (which decides which icons to
//! create) and the [`backend`](super::backend) (which does the actual pixel
//! work). This separation allows swapping backends (e.g. for testing with a
//! mock) without changing the emit logic.

use std::path::PathBuf;

/// PNG compression effort for encoded output.
///
/// `Best` trades encode time for smaller files. It maps to the original
/// tool's "optimize" save flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    Default,
    Best,
}

/// Parameters for one square resize: target edge length and destination.
///
/// The source image is not part of the params: it is decoded once per run
/// and passed in alongside, so the decode cost is paid exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub output: PathBuf,
    /// Target edge length; the output is always `size x size`.
    pub size: u32,
    pub compression: Compression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_defaults_to_default() {
        assert_eq!(Compression::default(), Compression::Default);
    }

    #[test]
    fn resize_params_are_comparable() {
        let a = ResizeParams {
            output: "/out/icon_32x32.png".into(),
            size: 32,
            compression: Compression::Best,
        };
        assert_eq!(a, a.clone());
    }
}
