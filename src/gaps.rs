//! Gap detection and compression over consecutive offsets
//!
//! The conversion sometimes leaves oversized vertical gaps between
//! consecutive content divs (page breaks, dropped images). A gap is "large"
//! when the delta between two consecutive offsets exceeds a threshold; the
//! fix walks the matches in document order accumulating how far everything
//! after each large gap must move up so the gap shrinks to nominal line
//! spacing.

use crate::scanner::OffsetMatch;
use log::debug;
use std::ops::Range;

/// Tuning knobs for gap detection and compression.
#[derive(Debug, Clone)]
pub struct GapConfig {
    /// Delta above which a consecutive pair counts as a large gap, in em
    /// (default: 10.0)
    pub threshold: f64,
    /// Expected spacing between normally laid out consecutive divs, in em
    /// (default: 1.22)
    pub nominal_spacing: f64,
    /// Corrections at or below this magnitude are skipped (default: 0.01)
    pub min_change: f64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            nominal_spacing: 1.22,
            min_change: 0.01,
        }
    }
}

/// A consecutive pair of offsets whose delta exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Index of the earlier match in document order
    pub index: usize,
    /// Offset of the earlier match, in em
    pub current: f64,
    /// Offset of the later match, in em
    pub next: f64,
    /// `next - current`
    pub magnitude: f64,
}

/// One planned offset correction, tied to a specific match by position.
///
/// Corrections are keyed by match index rather than by original value, so
/// two divs sharing an identical offset are corrected independently.
#[derive(Debug, Clone)]
pub struct Correction {
    /// Index of the match in document order
    pub match_index: usize,
    /// Offset before compression, in em
    pub old_offset: f64,
    /// Offset after compression, in em
    pub new_offset: f64,
    /// Byte range of the numeric literal to rewrite
    pub value_span: Range<usize>,
}

/// Find every large gap between consecutive matches in document order.
pub fn find_gaps(matches: &[OffsetMatch], config: &GapConfig) -> Vec<Gap> {
    matches
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let gap = pair[1].offset - pair[0].offset;
            (gap > config.threshold).then_some(Gap {
                index: i,
                current: pair[0].offset,
                next: pair[1].offset,
                magnitude: gap,
            })
        })
        .collect()
}

/// Walk matches in order, compressing every large gap down to nominal
/// spacing.
///
/// A running accumulator grows by `(gap - nominal_spacing)` at each large
/// gap; every match's corrected offset is its original minus the accumulator
/// at that point. Returns one correction per match that moves by more than
/// `min_change`, so untouched prefixes of the document produce no entries.
pub fn plan_compression(matches: &[OffsetMatch], config: &GapConfig) -> Vec<Correction> {
    let mut accumulator = 0.0f64;
    let mut corrections = Vec::new();

    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            let gap = m.offset - matches[i - 1].offset;
            if gap > config.threshold {
                accumulator += gap - config.nominal_spacing;
                debug!(
                    "large gap of {:.2}em before match {}, accumulator now {:.2}em",
                    gap, i, accumulator
                );
            }
        }

        let new_offset = m.offset - accumulator;
        if (m.offset - new_offset).abs() > config.min_change {
            corrections.push(Correction {
                match_index: i,
                old_offset: m.offset,
                new_offset,
                value_span: m.value_span.clone(),
            });
        }
    }

    corrections
}
