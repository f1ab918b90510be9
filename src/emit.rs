//! The resize-and-emit routine.
//!
//! Takes one source image and a list of target edge lengths, and writes one
//! square PNG per size next to the source. The source is decoded exactly
//! once; each size is resampled from the same in-memory pixels.
//!
//! ## Default configuration
//!
//! ```text
//! Sizes:       256, 128, 64, 32, 16
//! Naming:      {stem}_{size}x{size}.png
//! Compression: zlib default
//! ```
//!
//! ## Failure semantics
//!
//! A missing source or a zero size aborts before anything is written. A
//! decode, resample, or encode failure stops the loop at the failing size;
//! icons already written stay on disk. There is no rollback, and duplicate
//! sizes silently overwrite their earlier output (last writer wins, which
//! is idempotent for a fixed source).

use crate::imaging::{
    BackendError, Compression, Dimensions, IconBackend, ResizeParams, RustBackend,
};
use crate::naming::{NamingPolicy, output_path};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// The size list used when the caller does not supply one.
pub const DEFAULT_SIZES: &[u32] = &[256, 128, 64, 32, 16];

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Target size must be a positive number of pixels")]
    InvalidSize,
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// What to emit: which sizes, under which names, at which compression.
#[derive(Debug, Clone)]
pub struct EmitPlan {
    pub sizes: Vec<u32>,
    pub naming: NamingPolicy,
    pub compression: Compression,
}

impl Default for EmitPlan {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            naming: NamingPolicy::SourceStem,
            compression: Compression::Default,
        }
    }
}

/// Progress events sent while emitting, consumed by the CLI printer thread.
#[derive(Debug, Clone, PartialEq)]
pub enum EmitEvent {
    /// The source does not carry a `.png` extension. Processing continues;
    /// the decoder sniffs the real format from the file contents.
    ExtensionWarning {
        source: String,
    },
    /// Sent once the source has been decoded, before any resize.
    Started {
        source: String,
        dimensions: Dimensions,
        size_count: usize,
    },
    IconWritten {
        size: u32,
        path: String,
    },
}

/// One successfully written icon.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Everything a run produced, in processing order.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub source: PathBuf,
    pub icons: Vec<EmittedIcon>,
}

/// Emit icons using the production backend.
pub fn emit_icons(
    source: &Path,
    plan: &EmitPlan,
    events: Option<Sender<EmitEvent>>,
) -> Result<EmitReport, EmitError> {
    let backend = RustBackend::new();
    emit_icons_with_backend(&backend, source, plan, events)
}

/// Emit icons using a specific backend (allows testing with a mock).
pub fn emit_icons_with_backend(
    backend: &impl IconBackend,
    source: &Path,
    plan: &EmitPlan,
    events: Option<Sender<EmitEvent>>,
) -> Result<EmitReport, EmitError> {
    // Both preconditions are checked before any decode or write so a bad
    // invocation leaves the output directory untouched.
    if !source.exists() {
        return Err(EmitError::SourceNotFound(source.to_path_buf()));
    }
    if plan.sizes.iter().any(|&s| s == 0) {
        return Err(EmitError::InvalidSize);
    }

    let send = |event: EmitEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only loses progress lines, never the run.
            let _ = tx.send(event);
        }
    };

    if !has_png_extension(source) {
        send(EmitEvent::ExtensionWarning {
            source: source.display().to_string(),
        });
    }

    let decoded = backend.decode(source)?;

    send(EmitEvent::Started {
        source: source.display().to_string(),
        dimensions: decoded.dimensions(),
        size_count: plan.sizes.len(),
    });

    let mut icons = Vec::with_capacity(plan.sizes.len());
    for &size in &plan.sizes {
        let output = output_path(source, &plan.naming, size);
        backend.resize(
            &decoded,
            &ResizeParams {
                output: output.clone(),
                size,
                compression: plan.compression,
            },
        )?;
        send(EmitEvent::IconWritten {
            size,
            path: output.display().to_string(),
        });
        icons.push(EmittedIcon { size, path: output });
    }

    Ok(EmitReport {
        source: source.to_path_buf(),
        icons,
    })
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
