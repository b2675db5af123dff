use crate::{Result, ScanError};
use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// ── TextExtractor ─────────────────────────────────────────────────────────────

/// Turns one document into plain text.
///
/// [`crate::Scanner`] is generic over this trait so another PDF back end, or
/// a fake in tests, can be swapped in without touching the traversal.
pub trait TextExtractor {
    /// Extract the full text content of the file at `path`.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

// ── LopdfExtractor ────────────────────────────────────────────────────────────

/// The default [`TextExtractor`], built on `lopdf`.
///
/// All pages are extracted in one pass first. If that fails (one bad content
/// stream is enough), each page is retried on its own and whatever decodes is
/// kept. Only when no page yields text is the file reported as unreadable.
#[derive(Debug, Clone, Default)]
pub struct LopdfExtractor {
    max_file_size: Option<u64>,
}

impl LopdfExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to parse files larger than `limit` bytes.
    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    fn check_size(&self, path: &Path) -> Result<()> {
        if let Some(limit) = self.max_file_size {
            let size = fs::metadata(path)?.len();
            if size > limit {
                return Err(ScanError::FileTooLarge {
                    path: path.to_path_buf(),
                    size,
                    limit,
                });
            }
        }
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let document = Document::load(path).map_err(|e| ScanError::Extraction {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if document.is_encrypted() {
            return Err(ScanError::Encrypted(path.to_path_buf()));
        }

        Ok(document)
    }

    /// Page-by-page fallback. Returns `None` when every page failed.
    fn extract_pages_individually(
        &self,
        document: &Document,
        page_numbers: &[u32],
        path: &Path,
    ) -> Option<String> {
        let mut text = String::new();
        let mut decoded = 0usize;

        for &page in page_numbers {
            match document.extract_text(&[page]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    decoded += 1;
                }
                Err(e) => debug!("{}: page {page} unreadable: {e}", path.display()),
            }
        }

        if decoded == 0 {
            return None;
        }

        if decoded < page_numbers.len() {
            warn!(
                "{}: only {decoded} of {} page(s) could be read",
                path.display(),
                page_numbers.len()
            );
        }
        Some(text)
    }
}

impl TextExtractor for LopdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        self.check_size(path)?;
        let document = self.load(path)?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Ok(String::new());
        }

        match document.extract_text(&page_numbers) {
            Ok(text) => Ok(text),
            Err(e) => {
                debug!("{}: whole-document extraction failed ({e}), retrying per page", path.display());
                self.extract_pages_individually(&document, &page_numbers, path)
                    .ok_or_else(|| ScanError::Extraction {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    })
            }
        }
    }
}
