use crate::{IdentifierKind, IdentifierMatch};
use std::path::PathBuf;

// ── FileReport ───────────────────────────────────────────────────────────────

/// How processing of one candidate ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Text was extracted and matched (possibly with zero hits).
    Scanned,
    /// Text extraction failed; the message explains why.
    Unreadable(String),
}

/// The result of scanning one PDF.
///
/// Returned inside [`ScanReport::files`] and handed to
/// [`crate::Reporter::file_finished`] as soon as the file is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path of the PDF, as discovered under the scan root.
    pub path: PathBuf,

    /// Identifiers found in the file, grouped by kind. Empty when the file
    /// was unreadable.
    pub matches: Vec<IdentifierMatch>,

    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_unreadable(&self) -> bool {
        matches!(self.outcome, FileOutcome::Unreadable(_))
    }

    /// The extraction error message, if the file could not be read.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FileOutcome::Unreadable(reason) => Some(reason),
            FileOutcome::Scanned => None,
        }
    }

    /// The matches of a single kind, in text order.
    pub fn matches_of(&self, kind: IdentifierKind) -> impl Iterator<Item = &IdentifierMatch> {
        self.matches.iter().filter(move |m| m.kind == kind)
    }

    /// The file name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ── ScanStats ────────────────────────────────────────────────────────────────

/// Counters accumulated over a whole scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// PDF candidates found under the scan root.
    pub files_found: usize,
    /// Candidates whose text was extracted.
    pub files_scanned: usize,
    /// Candidates that could not be read.
    pub files_unreadable: usize,
    pub dni_matches: usize,
    pub nie_matches: usize,
}

impl ScanStats {
    pub fn total_matches(&self) -> usize {
        self.dni_matches + self.nie_matches
    }

    pub(crate) fn record(&mut self, file: &FileReport) {
        if file.is_unreadable() {
            self.files_unreadable += 1;
        } else {
            self.files_scanned += 1;
        }
        for m in &file.matches {
            match m.kind {
                IdentifierKind::Dni => self.dni_matches += 1,
                IdentifierKind::Nie => self.nie_matches += 1,
            }
        }
    }

    /// Count for one kind.
    pub fn count(&self, kind: IdentifierKind) -> usize {
        match kind {
            IdentifierKind::Dni => self.dni_matches,
            IdentifierKind::Nie => self.nie_matches,
        }
    }
}

// ── ScanReport ───────────────────────────────────────────────────────────────

/// Everything a scan produced, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub(crate) fn new(root: PathBuf, files_found: usize) -> Self {
        Self {
            root,
            files: Vec::with_capacity(files_found),
            stats: ScanStats {
                files_found,
                ..Default::default()
            },
        }
    }

    pub(crate) fn push(&mut self, file: FileReport) {
        self.stats.record(&file);
        self.files.push(file);
    }

    /// `true` when no identifier was found in any file.
    pub fn is_empty(&self) -> bool {
        self.stats.total_matches() == 0
    }

    pub fn files_with_matches(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.matches.is_empty())
    }

    pub fn unreadable_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.is_unreadable())
    }

    /// Every match as a `(file, match)` pair, in report order.
    pub fn all_matches(&self) -> impl Iterator<Item = (&FileReport, &IdentifierMatch)> {
        self.files
            .iter()
            .flat_map(|f| f.matches.iter().map(move |m| (f, m)))
    }
}
