//! # busqueitor
//!
//! A Rust library for finding Spanish identity numbers inside PDF documents.
//!
//! ## What this crate does
//!
//! 1. **Resolve the target**: sanitises a directory path and checks that it
//!    exists and can be listed.
//! 2. **Enumerate candidates**: lists the `.pdf` files directly inside the
//!    directory (or below it, when scanning recursively).
//! 3. **Extract text**: reads every page of each candidate through a
//!    [`TextExtractor`] (by default [`LopdfExtractor`]).
//! 4. **Match identifiers**: runs the text against the [`RULES`] table
//!    (DNI/NIF and NIE shapes) and reports every hit through a [`Reporter`].
//!
//! A file that cannot be read is recorded and skipped; it never aborts the
//! rest of the scan.
//!
//! ## Quick example
//!
//! ```no_run
//! use busqueitor::{ConsoleReporter, ColorMode, ScanTarget, Scanner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let target = ScanTarget::resolve("./documents")?;
//! let mut reporter = ConsoleReporter::new(std::io::stdout(), ColorMode(true));
//!
//! let report = Scanner::new().scan(&target, &mut reporter)?;
//! for file in report.files_with_matches() {
//!     for m in &file.matches {
//!         println!("{} → {} {}", file.path.display(), m.kind, m.value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod discovery;
mod export;
mod extractor;
mod identifiers;
mod output;
mod report;
mod scanner;
mod target;

pub use discovery::{enumerate_candidates, is_pdf_path};
pub use export::write_csv;
pub use extractor::{LopdfExtractor, TextExtractor};
pub use identifiers::{
    dedup_matches, find_identifiers, IdentifierKind, IdentifierMatch, IdentifierRule, RULES,
};
pub use output::{ColorMode, ConsoleReporter, Reporter};
pub use report::{FileOutcome, FileReport, ScanReport, ScanStats};
pub use scanner::Scanner;
pub use target::ScanTarget;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`Scanner`].
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// When `true`, PDF files in subdirectories are scanned as well.
    /// The default is a flat, non-recursive listing.
    pub recursive: bool,

    /// When `true`, each identifier is reported once per file even if the
    /// text contains it several times.
    pub unique: bool,

    /// If set, PDFs larger than this many bytes are not parsed and are
    /// reported as unreadable with [`ScanError::FileTooLarge`].
    pub max_file_size: Option<u64>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root is missing, not a directory, or cannot be listed.
    /// Fatal: no file is processed.
    #[error("invalid scan directory '{}': {reason}", path.display())]
    Path { path: PathBuf, reason: String },

    /// A single PDF could not be turned into text.
    #[error("cannot extract text from '{}': {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },

    /// The PDF is encrypted and its text is not accessible.
    #[error("'{}' is encrypted", .0.display())]
    Encrypted(PathBuf),

    /// The PDF exceeds the configured `max_file_size`.
    #[error("'{}' is {size} bytes, above the {limit} byte limit", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// A filesystem I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the CSV export failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScanError {
    /// Returns `true` for errors that stop the whole scan rather than a
    /// single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::Path { .. })
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ScanError>;
