//! CLI tool: compress oversized vertical gaps in converted HTML
//!
//! Usage: fix-spacing <html_file> [--dry-run]
//!
//! Detects consecutive content divs whose top offsets jump by more than the
//! gap threshold, compresses each such gap down to nominal line spacing, and
//! rewrites the file in place. With --dry-run the gaps are reported but the
//! file is left untouched.

use pdfhtml_repair::{fix_gaps_in_file, GapConfig};
use std::env;
use std::process;

/// How many detected gaps to list before truncating the report.
const MAX_GAPS_SHOWN: usize = 10;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <html_file> [--dry-run]", args[0]);
        eprintln!();
        eprintln!("Compresses oversized vertical gaps between content divs");
        eprintln!("down to nominal line spacing and rewrites the file.");
        process::exit(1);
    }

    let html_path = &args[1];
    let dry_run = args.iter().skip(2).any(|a| a == "--dry-run");

    let config = GapConfig::default();
    let report = match fix_gaps_in_file(html_path, &config, dry_run) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Found {} content divs", report.match_count);

    if report.gaps.is_empty() {
        println!("No large gaps found");
        return;
    }

    println!();
    println!("Found {} large gaps:", report.gaps.len());
    for gap in report.gaps.iter().take(MAX_GAPS_SHOWN) {
        println!(
            "  Gap of {:.2}em between {:.2}em and {:.2}em",
            gap.magnitude, gap.current, gap.next
        );
    }
    if report.gaps.len() > MAX_GAPS_SHOWN {
        println!("  ... and {} more", report.gaps.len() - MAX_GAPS_SHOWN);
    }

    println!();
    if dry_run {
        println!(
            "Dry run: {} positions would be adjusted, file not modified",
            report.fixed_count
        );
    } else {
        println!("Fixing gaps...");
        println!("Fixed {} positioning issues!", report.fixed_count);
    }
}
