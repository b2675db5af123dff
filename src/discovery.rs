use crate::{Result, ScanError, ScanTarget};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Returns `true` when `path` has a `.pdf` extension (any case).
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// List the PDF candidates of `target`.
///
/// Only regular files with a `.pdf` extension are returned; everything else
/// is skipped silently. The listing is flat unless `recursive` is set, and is
/// sorted by path so that scanning an unchanged directory twice visits files
/// in the same order.
pub fn enumerate_candidates(target: &ScanTarget, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut candidates = if recursive {
        walk_recursive(target.path())
    } else {
        list_flat(target.path())?
    };

    candidates.sort();
    debug!(
        "{} PDF candidate(s) under {}",
        candidates.len(),
        target.path().display()
    );
    Ok(candidates)
}

/// One level only. An error listing the root is fatal; an unreadable entry
/// inside it is skipped.
fn list_flat(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| ScanError::Path {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", root.display());
                continue;
            }
        };

        let path = entry.path();
        if is_pdf_path(&path) && path.is_file() {
            out.push(path);
        }
    }
    Ok(out)
}

fn walk_recursive(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_pdf_path(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}
