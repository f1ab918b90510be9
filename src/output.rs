//! CLI output formatting.
//!
//! Each display concern has a `format_*` function (returns strings, pure,
//! no I/O) for testability and a `print_*` wrapper that writes to stdout.
//!
//! # Output format
//!
//! ```text
//! Processing logo.png (300x300, 5 sizes)
//!     256x256 → logo_256x256.png
//!     128x128 → logo_128x128.png
//!     ...
//! Generated 5 icons from logo.png
//! ```
//!
//! Progress lines lead with the icon geometry; the output path follows as
//! context. Warnings are part of the progress stream; hard errors are
//! printed to stderr by `main`, never here.

use crate::emit::{EmitEvent, EmitReport};
use std::path::Path;

/// Indentation for per-icon progress lines: one 4-space level.
fn indent(line: String) -> String {
    format!("    {line}")
}

/// Format a single emit progress event as a display line.
pub fn format_emit_event(event: &EmitEvent) -> String {
    match event {
        EmitEvent::Started {
            source,
            dimensions,
            size_count,
        } => {
            format!(
                "Processing {source} ({}x{}, {size_count} sizes)",
                dimensions.width, dimensions.height
            )
        }
        EmitEvent::ExtensionWarning { source } => {
            format!("Warning: {source} does not have a .png extension; continuing anyway")
        }
        EmitEvent::IconWritten { size, path } => {
            let filename = Path::new(path)
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            indent(format!("{size}x{size} \u{2192} {filename}"))
        }
    }
}

/// Print one emit progress event to stdout.
pub fn print_emit_event(event: &EmitEvent) {
    println!("{}", format_emit_event(event));
}

/// Format the end-of-run summary line.
pub fn format_run_summary(report: &EmitReport) -> String {
    let noun = if report.icons.len() == 1 {
        "icon"
    } else {
        "icons"
    };
    format!(
        "Generated {} {} from {}",
        report.icons.len(),
        noun,
        report.source.display()
    )
}

/// Print the end-of-run summary to stdout.
pub fn print_run_summary(report: &EmitReport) {
    println!("{}", format_run_summary(report));
}
