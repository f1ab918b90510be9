//! # Iconsmith
//!
//! Resize one source image (a PNG icon, typically) into a fixed set of
//! square sizes, writing each result as a separate PNG next to the source.
//!
//! The whole tool is one routine: decode once, then for every requested
//! edge length produce a `size x size` Lanczos3 resample and encode it as
//! PNG under a size-derived filename. Strictly sequential, no caching, no
//! rollback: a failure stops the run and leaves already-written icons on
//! disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`emit`] | The resize-and-emit routine: preconditions, decode-once, per-size loop, progress events |
//! | [`naming`] | Deterministic output-filename policies (source-stem and fixed-prefix) |
//! | [`imaging`] | [`IconBackend`](imaging::IconBackend) trait + pure-Rust `image`-crate backend |
//! | [`output`] | Console formatting: pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## One Routine, Two Naming Policies
//!
//! The tool descends from two near-identical scripts that differed only in
//! output naming and PNG compression effort. Those are collapsed into a
//! single routine parameterized by [`naming::NamingPolicy`] and
//! [`imaging::Compression`] instead of duplicating the loop.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling, PNG
//! codec), statically linked. No system dependencies: download one binary
//! and it works.
//!
//! ## Exact Squares, Distortion Included
//!
//! Targets are always squares and the resample is `resize_exact`: a
//! non-square source gets distorted rather than letterboxed or cropped.
//! Icon sources are square in practice, and this preserves the behavior
//! users of the predecessor scripts already rely on.
//!
//! ## Extension Check Is a Warning
//!
//! A non-`.png` extension prints a warning but does not stop the run. The
//! decoder sniffs the real format from the file contents, so a mislabeled
//! but valid raster still converts.

pub mod emit;
pub mod imaging;
pub mod naming;
pub mod output;
