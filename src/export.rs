use crate::{Result, ScanReport, RULES};
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

const HEADER: [&str; 4] = ["file", "kind", "identifier", "offset"];

/// Write every match of `report` to a CSV file at `path`.
///
/// One row per match, then a `summary` marker row and a block with the count
/// per kind, the total, and the number of unreadable files. An existing file
/// is overwritten.
pub fn write_csv<P: AsRef<Path>>(report: &ScanReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(HEADER)?;
    for (file, m) in report.all_matches() {
        let file_path = file.path.display().to_string();
        let offset = m.offset.to_string();
        wtr.write_record([
            file_path.as_str(),
            m.kind.label(),
            m.value.as_str(),
            offset.as_str(),
        ])?;
    }

    wtr.write_record(["summary"])?;
    for rule in RULES {
        let count = report.stats.count(rule.kind).to_string();
        wtr.write_record([format!("Total {}", rule.kind), count])?;
    }
    wtr.write_record([
        "Total identifiers".to_string(),
        report.stats.total_matches().to_string(),
    ])?;
    wtr.write_record([
        "Unreadable files".to_string(),
        report.stats.files_unreadable.to_string(),
    ])?;

    wtr.flush()?;
    info!(
        "wrote {} identifier(s) to {}",
        report.stats.total_matches(),
        path.display()
    );
    Ok(())
}
