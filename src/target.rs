use crate::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};

// ── ScanTarget ────────────────────────────────────────────────────────────────

/// A directory that has been checked and is ready to be scanned.
///
/// The only way to obtain one is [`ScanTarget::resolve`], so holding a
/// `ScanTarget` means the path existed, was a directory and could be listed
/// at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    path: PathBuf,
}

impl ScanTarget {
    /// Sanitise `raw` and validate it as a scan root.
    ///
    /// Surrounding whitespace and one pair of matching quotes are removed
    /// (terminals quote paths that are dragged into them) and a leading `~`
    /// is expanded to the home directory.
    ///
    /// Fails with [`ScanError::Path`] when the path is empty, does not exist,
    /// is not a directory, or cannot be listed.
    pub fn resolve<P: AsRef<Path>>(raw: P) -> Result<Self> {
        let path = sanitize_path(raw.as_ref());

        if path.as_os_str().is_empty() {
            return Err(path_error(path, "no directory given"));
        }

        let meta = fs::metadata(&path).map_err(|e| path_error(path.clone(), e.to_string()))?;
        if !meta.is_dir() {
            return Err(path_error(path, "not a directory"));
        }

        fs::read_dir(&path).map_err(|e| path_error(path.clone(), e.to_string()))?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for ScanTarget {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn path_error(path: PathBuf, reason: impl Into<String>) -> ScanError {
    ScanError::Path {
        path,
        reason: reason.into(),
    }
}

fn sanitize_path(raw: &Path) -> PathBuf {
    let Some(text) = raw.to_str() else {
        // Not UTF-8: nothing to strip, hand it through untouched.
        return raw.to_path_buf();
    };

    let text = strip_quotes(text.trim());

    if text == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = text.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(text)
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
