//! CLI tool: report the maximum top offset in converted HTML
//!
//! Usage: find-max-offset <html_file>
//!
//! Scans the content divs and prints the match count, the maximum top
//! offset, and a recommended min-height for the page container. Read-only;
//! the file is never modified.

use pdfhtml_repair::scan_file;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <html_file>", args[0]);
        eprintln!();
        eprintln!("Reports the maximum top offset among content divs and a");
        eprintln!("recommended min-height for the container.");
        process::exit(1);
    }

    let report = match scan_file(&args[1]) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Found {} content divs", report.match_count);

    if report.match_count == 0 {
        return;
    }

    if let Some(max) = report.max_offset {
        println!();
        println!("Maximum top position: {}em", max);
    }
    if let Some(snippet) = &report.max_snippet {
        println!("Last content element: {}...", snippet);
    }
    if let Some(height) = report.recommended_height {
        println!();
        println!("Recommended min-height: {}em", height);
    }
}
