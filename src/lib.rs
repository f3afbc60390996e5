//! Post-processing for PDF-to-HTML converter output
//!
//! The converter positions every content div absolutely with an inline
//! `top:<n>em` declaration. This crate provides two passes over that output:
//! - scanning for the maximum offset to size the page container, and
//! - detecting oversized vertical gaps left by the conversion and
//!   compressing them down to nominal line spacing.
//!
//! Each pass is a single forward walk over the regex matches; the fixer
//! rewrites matched spans in place and replaces the file atomically.

pub mod gaps;
pub mod rewrite;
pub mod scanner;

pub use gaps::{find_gaps, plan_compression, Correction, Gap, GapConfig};
pub use scanner::{scan_document, scan_offsets, OffsetMatch, ScanReport};

use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a gap-fixing run.
#[derive(Debug)]
pub struct FixReport {
    /// Number of content divs found
    pub match_count: usize,
    /// Large gaps detected between consecutive divs
    pub gaps: Vec<Gap>,
    /// Number of offsets moved by more than the configured tolerance
    pub fixed_count: usize,
    /// Whether the file was rewritten
    pub rewritten: bool,
}

/// Scan a document on disk for the maximum top offset.
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<ScanReport, RepairError> {
    let content = fs::read_to_string(path)?;
    Ok(scanner::scan_document(&content))
}

/// Detect large gaps in a document on disk and compress them in place.
///
/// With fewer than two matches or no large gaps the file is left
/// byte-identical. When `dry_run` is set, gaps and corrections are computed
/// and reported but the file is never written.
pub fn fix_gaps_in_file<P: AsRef<Path>>(
    path: P,
    config: &GapConfig,
    dry_run: bool,
) -> Result<FixReport, RepairError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let matches = scanner::scan_offsets(&content);
    let gaps = gaps::find_gaps(&matches, config);

    if gaps.is_empty() {
        return Ok(FixReport {
            match_count: matches.len(),
            gaps,
            fixed_count: 0,
            rewritten: false,
        });
    }

    let corrections = gaps::plan_compression(&matches, config);
    let fixed_count = corrections.len();

    if dry_run {
        return Ok(FixReport {
            match_count: matches.len(),
            gaps,
            fixed_count,
            rewritten: false,
        });
    }

    let updated = rewrite::apply_corrections(&content, &corrections);
    rewrite::write_atomic(path, &updated)?;

    Ok(FixReport {
        match_count: matches.len(),
        gaps,
        fixed_count,
        rewritten: true,
    })
}
