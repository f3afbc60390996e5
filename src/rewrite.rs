//! Span-based document rewrite and atomic file replacement
//!
//! Corrections are applied at the byte range of each match's numeric
//! capture rather than by global find/replace, so rewriting `top:5em` can
//! never clip the `5` out of a neighboring `top:50em`.

use crate::gaps::Correction;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Apply corrections at their captured byte ranges.
///
/// Spans are replaced back to front so earlier ranges stay valid while later
/// ones change length. Corrections are expected in document order, as
/// produced by [`plan_compression`](crate::gaps::plan_compression).
pub fn apply_corrections(content: &str, corrections: &[Correction]) -> String {
    let mut out = content.to_string();
    for c in corrections.iter().rev() {
        out.replace_range(c.value_span.clone(), &format_offset(c.new_offset));
    }
    out
}

/// Format an offset the way it appears inside the style attribute.
///
/// Rust's float `Display` prints the shortest string that round-trips, so a
/// clean `3.66` stays `3.66` instead of growing spurious digits.
pub fn format_offset(value: f64) -> String {
    format!("{}", value)
}

/// Replace `path` with `content` via a sibling temp file and rename.
///
/// The rename is atomic on the same filesystem, so an interrupted run leaves
/// either the original or the fully rewritten document, never a truncated
/// one.
pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let tmp = tmp_path(path);
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
