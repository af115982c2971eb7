//! File classification by name.
//!
//! [`classify`] maps a path to a [`Verdict`] using only the file name and
//! built-in tables, never the file's content. The rules apply in a fixed
//! order and the first one that matches wins:
//!
//! 1. No extension: `Makefile` and `configure` are special, anything else is
//!    unknown.
//! 2. A vendored/minified name fragment anywhere in the path excludes the
//!    file, even when its extension is recognised.
//! 3. A binary MIME guess (exact type, or gzip encoding) excludes the file.
//! 4. A MIME guess containing a binary type fragment excludes the file.
//! 5. The extension table gives the label; a miss is unknown and the
//!    extension is recorded as unresolved.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::language::{
    guess_mime, label_for_extension, split_last_extension, BINARY_MIME_TYPES,
    BINARY_MIME_TYPE_PARTS, NAME_FRAGMENT_EXCLUSIONS,
};

/// Why a file was excluded from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Path contains a vendored, minified or generated marker
    FileNamePart,
    /// Guessed MIME type is a known binary type, or the file is gzipped
    MimeBinary,
    /// Guessed MIME type contains a binary type fragment
    MimeBinaryPart,
}

impl ExclusionReason {
    /// Short reason code, as shown in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::FileNamePart => "file_name_part",
            ExclusionReason::MimeBinary => "mime-binary",
            ExclusionReason::MimeBinaryPart => "mime:binary-part",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classifier's decision for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Recognised language or category
    Label(String),
    /// Not recognised
    Unknown,
    /// Recognised as something that must not be counted
    Excluded(ExclusionReason),
}

impl Verdict {
    fn label(label: &str) -> Self {
        Verdict::Label(label.to_string())
    }

    /// The label, if the file was recognised.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Verdict::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Label(label) => f.write_str(label),
            Verdict::Unknown => f.write_str("Unknown"),
            Verdict::Excluded(reason) => write!(f, "Excluded:{reason}"),
        }
    }
}

/// Extensions seen during a run that the label table does not know.
///
/// Deduplicated, case preserved, iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnresolvedExtensions(BTreeSet<String>);

impl UnresolvedExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an extension. Returns false if it was already recorded.
    pub fn insert(&mut self, extension: &str) -> bool {
        self.0.insert(extension.to_string())
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.0.contains(extension)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Classify a file from its path.
///
/// Name fragments are matched against the whole path, so callers should pass
/// a path relative to the scan root (`./src/app.js`) rather than an absolute
/// one whose ancestors could match a fragment such as `/tmp/`.
///
/// Unrecognised extensions are added to `unresolved`. That record is advisory
/// and never changes how later files are classified.
///
/// # Example
///
/// ```rust
/// use spelunklib::{classify, ExclusionReason, UnresolvedExtensions, Verdict};
///
/// let mut unresolved = UnresolvedExtensions::new();
/// assert_eq!(
///     classify("./src/main.py", &mut unresolved),
///     Verdict::Label("Python".to_string())
/// );
/// assert_eq!(
///     classify("./web/node_modules/x.js", &mut unresolved),
///     Verdict::Excluded(ExclusionReason::FileNamePart)
/// );
/// assert_eq!(classify("./notes.xyz", &mut unresolved), Verdict::Unknown);
/// assert!(unresolved.contains("xyz"));
/// ```
pub fn classify(path: impl AsRef<Path>, unresolved: &mut UnresolvedExtensions) -> Verdict {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let (stem, extension) = split_last_extension(&file_name);
    let Some(extension) = extension else {
        return match stem {
            "Makefile" => Verdict::label("Makefile"),
            "configure" => Verdict::label("Autoconf"),
            _ => Verdict::Unknown,
        };
    };

    // Must run before the extension lookup: vendored code keeps its
    // nominal extension.
    if has_excluded_fragment(path) {
        return Verdict::Excluded(ExclusionReason::FileNamePart);
    }

    let mime = guess_mime(&file_name);
    if mime
        .mime_type
        .is_some_and(|m| BINARY_MIME_TYPES.contains(&m))
        || mime.encoding == Some("gzip")
    {
        return Verdict::Excluded(ExclusionReason::MimeBinary);
    }
    if mime
        .mime_type
        .is_some_and(|m| BINARY_MIME_TYPE_PARTS.iter().any(|part| m.contains(part)))
    {
        return Verdict::Excluded(ExclusionReason::MimeBinaryPart);
    }

    match label_for_extension(extension) {
        Some(label) => Verdict::label(label),
        None => {
            unresolved.insert(extension);
            Verdict::Unknown
        }
    }
}

fn has_excluded_fragment(path: &Path) -> bool {
    let normalized = path.to_string_lossy().replace('\\', "/").to_lowercase();
    NAME_FRAGMENT_EXCLUSIONS
        .iter()
        .any(|fragment| normalized.contains(&fragment.to_lowercase()))
}
