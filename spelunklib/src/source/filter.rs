//! Tree discovery with directory pruning.
//!
//! Excluded directories are removed from the walk before descent, so nothing
//! beneath them is opened, listed or counted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::SpelunkError;
use crate::Result;

use super::options::ScanOptions;

/// Legacy version-control directory that is always pruned, matched exactly.
pub const LEGACY_VCS_DIR: &str = "CVS";

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str, options: &ScanOptions) -> bool {
    name == LEGACY_VCS_DIR || options.is_excluded_dir(name)
}

/// Discover every candidate file under `root`.
///
/// Walks the tree top-down in file-name order. Directories named in
/// `options.excluded_dirs` (and `CVS`) are pruned before descent. The
/// returned list holds every non-directory entry reached; classification
/// happens later.
pub fn discover_files(root: impl AsRef<Path>, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(SpelunkError::PathNotFound(root.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    if !metadata.is_dir() {
        return Err(SpelunkError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_string_lossy();
            if should_skip_dir(&name, options) {
                debug!(path = %e.path().display(), "pruning excluded directory");
                return false;
            }
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
