//! Scan a directory and print only the files that contain identifiers.
//!
//! ```text
//! cargo run --example scan_directory -- ./documents
//! ```

use busqueitor::{IdentifierKind, Reporter, ScanConfig, ScanTarget, Scanner};
use std::env;

/// Collects nothing; the report returned by `scan` is printed at the end.
struct Quiet;

impl Reporter for Quiet {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let target = ScanTarget::resolve(&dir)?;

    let config = ScanConfig {
        unique: true,
        ..Default::default()
    };
    let report = Scanner::with_config(config).scan(&target, &mut Quiet)?;

    for file in report.files_with_matches() {
        println!("{}", file.path.display());
        for kind in [IdentifierKind::Dni, IdentifierKind::Nie] {
            for m in file.matches_of(kind) {
                println!("  {kind:<8} {}", m.value);
            }
        }
    }

    for file in report.unreadable_files() {
        eprintln!("unreadable: {} ({})", file.path.display(), file.error().unwrap_or(""));
    }

    println!(
        "{} identifier(s) in {} file(s)",
        report.stats.total_matches(),
        report.stats.files_scanned
    );
    Ok(())
}
