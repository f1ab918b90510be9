//! Deterministic output-filename policies.
//!
//! Every emitted icon is named from its target edge length so a fixed size
//! list always produces the same set of filenames. Two policies exist,
//! matching the two historical routines this tool grew out of:
//!
//! - [`NamingPolicy::SourceStem`]: `logo.png` at 64 → `logo_64x64.png`
//! - [`NamingPolicy::FixedPrefix`]: prefix `MyIcon` at 64 → `MyIcon_64.png`
//!
//! Outputs always land in the source image's directory.

use std::path::{Path, PathBuf};

/// Fallback stem when the source path has no usable file stem.
const DEFAULT_STEM: &str = "icon";

/// How output filenames are derived from the source path and target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicy {
    /// `{base_name}_{size}x{size}.png`, keeping the source file stem.
    SourceStem,
    /// `{prefix}_{size}.png`, ignoring the source file stem entirely.
    FixedPrefix(String),
}

impl NamingPolicy {
    /// Filename for one icon under this policy.
    pub fn file_name(&self, source_stem: &str, size: u32) -> String {
        match self {
            NamingPolicy::SourceStem => format!("{source_stem}_{size}x{size}.png"),
            NamingPolicy::FixedPrefix(prefix) => format!("{prefix}_{size}.png"),
        }
    }
}

/// Full output path for one icon: the source's directory plus the
/// policy-derived filename.
pub fn output_path(source: &Path, policy: &NamingPolicy, size: u32) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_STEM.to_string());
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    dir.join(policy.file_name(&stem, size))
}
