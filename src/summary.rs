//! Console reporting for a run.
//!
//! These are user-facing progress lines on stdout, kept separate from the
//! tracing diagnostics on stderr so the output stays readable when the two
//! are interleaved.

use chrono::NaiveDateTime;
use logweave_collect::SourceReport;
use logweave_core::RunStats;
use std::path::Path;

pub fn banner() {
    println!(" ----------");
    println!("| logweave |");
    println!(" ----------");
    println!();
}

pub fn options(
    from: Option<&str>,
    until: Option<&str>,
    logs_path: Option<&Path>,
    archive_path: Option<&Path>,
) {
    println!("  Options:");
    if let Some(from) = from {
        println!("    * From datetime: {from}");
    }
    if let Some(until) = until {
        println!("    * Until datetime: {until}");
    }
    if let Some(path) = logs_path {
        println!("    * Path to logs: {}", path.display());
    }
    if let Some(path) = archive_path {
        println!("    * Path to supportconfig tarball: {}", path.display());
    }
    println!();
}

pub fn sources(reports: &[SourceReport]) {
    println!("  Collecting logs:");
    for report in reports {
        match &report.path {
            Some(path) => println!("    * {}: {}", report.name, path.display()),
            None => println!("    - Cannot find logs for '{}'", report.name),
        }
    }
    println!();
}

pub fn summary(stats: &RunStats) {
    println!("  Summary:");
    println!("    * {} events were collected.", stats.accepted);
    if let (Some(first), Some(last)) = (stats.first, stats.last) {
        println!("    * First event at: {}", iso(first));
        println!("    * Last event at: {}", iso(last));
    }
    println!();
}

pub fn results(output: &Path) {
    println!("  Results:");
    println!("    * Results HTML file: {}", output.display());
    println!();
}

pub fn finished() {
    println!(" -----------");
    println!("| Finished! |");
    println!(" -----------");
}

fn iso(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
