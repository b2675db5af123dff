use crate::{FileReport, IdentifierKind, IdentifierMatch, ScanReport, ScanTarget, RULES};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Receives scan progress and results.
///
/// The scanner calls these hooks in order: `scan_started` once,
/// `file_started`/`file_finished` per candidate, `scan_finished` once. Every
/// method has an empty default, so a sink only implements what it needs.
pub trait Reporter {
    fn scan_started(&mut self, _target: &ScanTarget, _candidates: &[std::path::PathBuf]) {}

    fn file_started(&mut self, _path: &Path) {}

    fn file_finished(&mut self, _file: &FileReport) {}

    fn scan_finished(&mut self, _report: &ScanReport) {}
}

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

// ── ConsoleReporter ──────────────────────────────────────────────────────────

/// Human-readable report written to any [`Write`] sink (normally stdout).
///
/// Write failures are logged and otherwise ignored: a closed pipe must not
/// change what the scan finds.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: ColorMode,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: ColorMode) -> Self {
        Self { out, color }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            warn!("failed to write report output: {e}");
        }
    }

    fn write_header(&mut self, target: &ScanTarget, count: usize) -> io::Result<()> {
        writeln!(self.out, "🔍 Scanning: {}", target.path().display())?;
        writeln!(self.out, "📄 PDF files: {count}")?;
        writeln!(self.out, "{}", "─".repeat(60))
    }

    fn write_file(&mut self, file: &FileReport) -> io::Result<()> {
        let name = file.display_name();

        if let Some(reason) = file.error() {
            if self.color.enabled() {
                let detail = format!("unreadable ({reason})");
                writeln!(self.out, "{} {}: {}", "✗".red(), name.bold(), detail.red())?;
            } else {
                writeln!(self.out, "✗ {name}: unreadable ({reason})")?;
            }
            return Ok(());
        }

        if file.matches.is_empty() {
            if self.color.enabled() {
                writeln!(self.out, "{}", format!("· {name}: no identifiers").dimmed())?;
            } else {
                writeln!(self.out, "· {name}: no identifiers")?;
            }
            return Ok(());
        }

        if self.color.enabled() {
            writeln!(self.out, "{} {}", "✓".green(), name.bold())?;
        } else {
            writeln!(self.out, "✓ {name}")?;
        }

        for rule in RULES {
            let hits: Vec<&IdentifierMatch> = file.matches_of(rule.kind).collect();
            if hits.is_empty() {
                continue;
            }
            let values: Vec<&str> = hits.iter().map(|m| m.value.as_str()).collect();
            let line = values.join(", ");
            let mut label = format!("{} ({})", rule.kind, hits.len());
            if self.color.enabled() {
                label = match rule.kind {
                    IdentifierKind::Dni => label.cyan().to_string(),
                    IdentifierKind::Nie => label.magenta().to_string(),
                };
            }
            writeln!(self.out, "    {label}: {line}")?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &ScanReport) -> io::Result<()> {
        let stats = &report.stats;
        writeln!(self.out, "{}", "─".repeat(60))?;

        if stats.files_found == 0 {
            return writeln!(self.out, "ℹ️  No PDF files found in {}", report.root.display());
        }

        writeln!(self.out, "📊 Summary:")?;
        writeln!(self.out, "   • {} file(s) scanned", stats.files_scanned)?;
        if stats.files_unreadable > 0 {
            let line = format!("   • {} file(s) unreadable", stats.files_unreadable);
            if self.color.enabled() {
                writeln!(self.out, "{}", line.yellow())?;
            } else {
                writeln!(self.out, "{line}")?;
            }
        }

        if report.is_empty() {
            return writeln!(self.out, "ℹ️  No identifiers found");
        }

        for rule in RULES {
            writeln!(self.out, "   • {}: {}", rule.kind, stats.count(rule.kind))?;
        }
        writeln!(self.out, "   • Total: {}", stats.total_matches())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn scan_started(&mut self, target: &ScanTarget, candidates: &[std::path::PathBuf]) {
        let result = self.write_header(target, candidates.len());
        self.emit(result);
    }

    fn file_finished(&mut self, file: &FileReport) {
        let result = self.write_file(file);
        self.emit(result);
    }

    fn scan_finished(&mut self, report: &ScanReport) {
        let result = self.write_summary(report).and_then(|_| self.out.flush());
        self.emit(result);
    }
}
