use crate::discovery::enumerate_candidates;
use crate::extractor::{LopdfExtractor, TextExtractor};
use crate::identifiers::{dedup_matches, find_identifiers};
use crate::{
    FileOutcome, FileReport, Reporter, Result, ScanConfig, ScanReport, ScanTarget,
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Drives a scan: enumerate the target, then extract and match each
/// candidate in turn.
///
/// # Creating a scanner
///
/// ```no_run
/// use busqueitor::{LopdfExtractor, ScanConfig, Scanner};
///
/// // Defaults: flat listing, every occurrence reported, no size limit
/// let s = Scanner::new();
///
/// // With custom configuration
/// let cfg = ScanConfig {
///     recursive: true,
///     unique: true,
///     max_file_size: Some(50 * 1024 * 1024),
/// };
/// let s = Scanner::with_config(cfg);
/// ```
pub struct Scanner<E: TextExtractor = LopdfExtractor> {
    extractor: E,
    config: ScanConfig,
}

impl Scanner<LopdfExtractor> {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// A scanner using [`LopdfExtractor`], with its size limit taken from
    /// `config`.
    pub fn with_config(config: ScanConfig) -> Self {
        let extractor = LopdfExtractor::new().with_max_file_size(config.max_file_size);
        Self { extractor, config }
    }
}

impl Default for Scanner<LopdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> Scanner<E> {
    /// A scanner with a custom extraction back end.
    ///
    /// `config.max_file_size` is not applied by the scanner itself; it is up
    /// to `extractor` to honour a size limit.
    pub fn with_extractor(extractor: E, config: ScanConfig) -> Self {
        Self { extractor, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan every PDF candidate of `target`.
    ///
    /// Only a failure to list the target is returned as an error. A file that
    /// cannot be read is recorded as [`FileOutcome::Unreadable`] and the scan
    /// moves on to the next one.
    pub fn scan(&self, target: &ScanTarget, reporter: &mut dyn Reporter) -> Result<ScanReport> {
        let candidates = enumerate_candidates(target, self.config.recursive)?;
        reporter.scan_started(target, &candidates);

        let mut report = ScanReport::new(target.path().to_path_buf(), candidates.len());

        for path in &candidates {
            reporter.file_started(path);
            let file = self.scan_file(path);
            reporter.file_finished(&file);
            report.push(file);
        }

        info!(
            "scanned {} of {} file(s): {} DNI/NIF, {} NIE, {} unreadable",
            report.stats.files_scanned,
            report.stats.files_found,
            report.stats.dni_matches,
            report.stats.nie_matches,
            report.stats.files_unreadable
        );

        reporter.scan_finished(&report);
        Ok(report)
    }

    /// Extract and match a single file. Never fails: extraction errors end up
    /// in the returned report.
    pub fn scan_file(&self, path: &Path) -> FileReport {
        debug!("scanning {}", path.display());

        let text = match self.extractor.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("skipping '{}': {e}", path.display());
                return FileReport {
                    path: path.to_path_buf(),
                    matches: Vec::new(),
                    outcome: FileOutcome::Unreadable(e.to_string()),
                };
            }
        };

        let mut matches = find_identifiers(&text);
        if self.config.unique {
            matches = dedup_matches(matches);
        }

        debug!("{}: {} identifier(s)", path.display(), matches.len());
        FileReport {
            path: path.to_path_buf(),
            matches,
            outcome: FileOutcome::Scanned,
        }
    }
}
