//! Marker extraction from converted HTML
//!
//! The converter emits absolutely positioned content divs of the form
//! `<div class="pdf24_01" style="...top:<n>em...">`. This module finds every
//! such div and records its offset together with the byte range of the
//! numeric literal, so later passes can rewrite the value in place without
//! touching surrounding markup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Class-name token the converter puts on content-bearing divs.
pub const CONTENT_CLASS: &str = "pdf24_01";

/// Padding added to the maximum offset when recommending a container height,
/// in em. Covers the height of the last element plus bottom margin.
pub const HEIGHT_PADDING_EM: f64 = 10.0;

/// How many characters of the maximum-offset tag to keep for reporting.
const SNIPPET_LEN: usize = 100;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div class="pdf24_01" style="([^"]*top:([\d.]+)em[^"]*)">"#).unwrap()
});

/// One content div matched in the document, in document order.
#[derive(Debug, Clone)]
pub struct OffsetMatch {
    /// Offset parsed from the `top` declaration, in em
    pub offset: f64,
    /// Full inline style attribute the offset was found in
    pub style: String,
    /// Byte range of the numeric literal within the document
    pub value_span: Range<usize>,
    /// Byte offset where the whole opening tag starts
    pub tag_start: usize,
}

/// Result of scanning a document for the maximum offset.
#[derive(Debug)]
pub struct ScanReport {
    /// Number of content divs found
    pub match_count: usize,
    /// Maximum offset found; `None` when the document has no matches
    pub max_offset: Option<f64>,
    /// Leading characters of the tag carrying the maximum, when one offset
    /// was strictly positive
    pub max_snippet: Option<String>,
    /// Maximum offset plus [`HEIGHT_PADDING_EM`]
    pub recommended_height: Option<f64>,
}

/// Extract every marker match in document order.
///
/// Matches whose numeric literal does not parse as a float (e.g. a stray
/// `1.2.3`) are skipped rather than aborting the scan.
pub fn scan_offsets(content: &str) -> Vec<OffsetMatch> {
    MARKER_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let value = caps.get(2)?;
            let offset: f64 = value.as_str().parse().ok()?;
            Some(OffsetMatch {
                offset,
                style: caps.get(1)?.as_str().to_string(),
                value_span: value.range(),
                tag_start: caps.get(0)?.start(),
            })
        })
        .collect()
}

/// Scan a document and report the maximum offset and recommended height.
///
/// The maximum starts from zero with strict greater-than comparison, so ties
/// resolve to the first match encountered. A document with matches but no
/// strictly positive offset still reports a maximum of zero.
pub fn scan_document(content: &str) -> ScanReport {
    let matches = scan_offsets(content);

    if matches.is_empty() {
        return ScanReport {
            match_count: 0,
            max_offset: None,
            max_snippet: None,
            recommended_height: None,
        };
    }

    let mut max_offset = 0.0f64;
    let mut max_match: Option<&OffsetMatch> = None;

    for m in &matches {
        if m.offset > max_offset {
            max_offset = m.offset;
            max_match = Some(m);
        }
    }

    let max_snippet = max_match
        .map(|m| content[m.tag_start..].chars().take(SNIPPET_LEN).collect());

    ScanReport {
        match_count: matches.len(),
        max_offset: Some(max_offset),
        max_snippet,
        recommended_height: Some(max_offset + HEIGHT_PADDING_EM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div(top: &str) -> String {
        format!(
            r#"<div class="pdf24_01" style="position:absolute;top:{}em;left:2em;">text</div>"#,
            top
        )
    }

    #[test]
    fn test_scan_offsets_basic() {
        let doc = format!("{}\n{}\n{}", div("0"), div("1.22"), div("2.44"));
        let matches = scan_offsets(&doc);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].offset, 0.0);
        assert_eq!(matches[1].offset, 1.22);
        assert_eq!(matches[2].offset, 2.44);
    }

    #[test]
    fn test_scan_offsets_captures_style_and_span() {
        let doc = div("3.5");
        let matches = scan_offsets(&doc);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].style.contains("top:3.5em"));
        assert_eq!(&doc[matches[0].value_span.clone()], "3.5");
    }

    #[test]
    fn test_scan_offsets_ignores_other_classes() {
        let doc = r#"<div class="pdf24_02" style="top:9em;">x</div>"#;
        assert!(scan_offsets(doc).is_empty());
    }

    #[test]
    fn test_scan_document_empty() {
        let report = scan_document("<html><body>nothing here</body></html>");
        assert_eq!(report.match_count, 0);
        assert!(report.max_offset.is_none());
        assert!(report.recommended_height.is_none());
    }

    #[test]
    fn test_scan_document_max_and_height() {
        let doc = format!("{}\n{}\n{}", div("1.22"), div("51.22"), div("2.44"));
        let report = scan_document(&doc);
        assert_eq!(report.match_count, 3);
        assert_eq!(report.max_offset, Some(51.22));
        assert_eq!(report.recommended_height, Some(61.22));
        assert!(report.max_snippet.unwrap().contains("top:51.22em"));
    }

    #[test]
    fn test_scan_document_tie_keeps_first() {
        let a = format!(
            r#"<div class="pdf24_01" style="top:7em;color:red;">a</div>{}"#,
            div("7")
        );
        let report = scan_document(&a);
        assert_eq!(report.max_offset, Some(7.0));
        assert!(report.max_snippet.unwrap().contains("color:red"));
    }

    #[test]
    fn test_scan_document_all_zero_offsets() {
        let doc = format!("{}{}", div("0"), div("0"));
        let report = scan_document(&doc);
        assert_eq!(report.match_count, 2);
        assert_eq!(report.max_offset, Some(0.0));
        assert_eq!(report.recommended_height, Some(HEIGHT_PADDING_EM));
        assert!(report.max_snippet.is_none());
    }
}
