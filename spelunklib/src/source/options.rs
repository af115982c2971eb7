//! Input options for a scan.
//!
//! Everything a run needs is passed in explicitly; there is no global
//! configuration.

use crate::data::lines::TextEncoding;

/// Directory names pruned from every scan unless the caller replaces them.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "$tf",
    ".git",
    ".hg",
    "coverage",
    "External",
    "apps_out",
    "bin",
    "bower_components",
    "css_out",
    "dist",
    "jquery",
    "js_out",
    "lib",
    "node_modules",
    "obj",
    "packages",
    "published",
    "temp",
    "tmp",
    "typings",
];

/// Extensions never read, whatever the classifier says about them.
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[
    "png", "gif", "jpg", "jpeg", "bmp", "mpr", "zip", "tar", "jar", "gz", "ico", "eot", "docx",
];

/// Options for scanning a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory names (not paths) to prune, compared case-insensitively
    pub excluded_dirs: Vec<String>,
    /// Extensions (without the dot) skipped before any read, case-insensitive
    pub skip_extensions: Vec<String>,
    /// Only count files carrying exactly this label
    pub language: Option<String>,
    /// Encoding used when reading files to count lines
    pub encoding: TextEncoding,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            skip_extensions: DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            language: None,
            encoding: TextEncoding::default(),
        }
    }
}

impl ScanOptions {
    /// Create options with the default exclusions, no language filter and UTF-8.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory name to prune, on top of those already configured.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dirs.push(name.into());
        self
    }

    /// Add several directory names to prune.
    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the excluded directory names entirely.
    pub fn excluded_dirs_only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the always-skip extension list.
    pub fn skip_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Only count files of one language label.
    pub fn language(mut self, label: impl Into<String>) -> Self {
        self.language = Some(label.into());
        self
    }

    /// Set the encoding used to read files.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Whether a directory with this name is pruned from the walk.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.excluded_dirs.iter().any(|d| d.to_lowercase() == name)
    }

    /// Whether files with this extension (no leading dot) are never read.
    pub fn skips_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.skip_extensions
            .iter()
            .any(|e| e.to_lowercase() == extension)
    }

    /// Whether a file passes the language filter.
    pub fn accepts_label(&self, label: &str) -> bool {
        self.language.as_deref().is_none_or(|l| l == label)
    }
}
