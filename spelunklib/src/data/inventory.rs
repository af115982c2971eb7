//! Aggregates built by one scan.
//!
//! An [`Inventory`] is created empty at the start of a run, filled by the
//! walker, and read-only afterwards. Only recognised labels ever become keys;
//! `Unknown` and excluded files never reach it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classify::UnresolvedExtensions;

/// Per-label file counts, line counts and directory occurrences.
///
/// Invariants, for every label:
/// - it is a key of `files_by_type` iff it is a key of `lines_by_type` and
///   of `locations_by_type`
/// - the counts in `locations_by_type[label]` sum to `files_by_type[label]`
/// - `visited_locations` equals the sum of all file counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Number of files per label
    pub files_by_type: BTreeMap<String, u64>,
    /// Number of lines per label
    pub lines_by_type: BTreeMap<String, u64>,
    /// Number of files per directory, per label. Directories are keyed by
    /// their display form, so names that are not valid UTF-8 still serialize.
    pub locations_by_type: BTreeMap<String, BTreeMap<String, u64>>,
    /// One per file recorded into `locations_by_type`
    pub visited_locations: u64,
    /// Extensions seen but absent from the label table
    pub unresolved_extensions: UnresolvedExtensions,
}

impl Inventory {
    /// Create a new empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one counted file into every aggregate.
    ///
    /// `lines` is zero for a file whose content could not be read; it still
    /// counts as a file and as a location.
    pub fn record_file(&mut self, label: &str, directory: &Path, lines: u64) {
        *self.files_by_type.entry(label.to_string()).or_default() += 1;
        *self.lines_by_type.entry(label.to_string()).or_default() += lines;
        *self
            .locations_by_type
            .entry(label.to_string())
            .or_default()
            .entry(directory.to_string_lossy().into_owned())
            .or_default() += 1;
        self.visited_locations += 1;
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.files_by_type.keys().map(String::as_str)
    }

    /// Files counted for a label (zero if absent).
    pub fn files(&self, label: &str) -> u64 {
        self.files_by_type.get(label).copied().unwrap_or(0)
    }

    /// Lines counted for a label (zero if absent).
    pub fn lines(&self, label: &str) -> u64 {
        self.lines_by_type.get(label).copied().unwrap_or(0)
    }

    /// Directories holding files of a label, with per-directory file counts.
    pub fn locations(&self, label: &str) -> impl Iterator<Item = (&str, u64)> {
        self.locations_by_type
            .get(label)
            .into_iter()
            .flat_map(|dirs| dirs.iter().map(|(dir, count)| (dir.as_str(), *count)))
    }

    /// Total files across all labels.
    pub fn total_files(&self) -> u64 {
        self.files_by_type.values().sum()
    }

    /// Total lines across all labels.
    pub fn total_lines(&self) -> u64 {
        self.lines_by_type.values().sum()
    }

    /// True if no file was counted.
    pub fn is_empty(&self) -> bool {
        self.files_by_type.is_empty()
    }
}
