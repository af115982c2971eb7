//! Tree scanning: classify, count and aggregate in one walk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::source::filter::discover_files;
use crate::source::options::ScanOptions;
use crate::Result;

use super::classify::{classify, Verdict};
use super::inventory::Inventory;
use super::language::split_last_extension;
use super::lines::count_lines;

/// Directory that paths are reported relative to.
const SCAN_ROOT: &str = ".";

/// Scan a directory tree and build its inventory.
///
/// This is the main entry point. It:
/// 1. Walks the tree once, pruning excluded directories before descent
/// 2. Classifies every file it reaches
/// 3. Counts lines of recognised files that pass the language filter
/// 4. Folds each counted file into the [`Inventory`]
///
/// Paths inside the inventory are relative to `root` and start with `.`,
/// so `root/src/main.c` is reported in directory `./src`.
///
/// Per-file problems never fail the scan: a file that disappears before it
/// is visited is skipped, and a file that cannot be read or decoded counts
/// as a file with zero lines.
///
/// # Example
///
/// ```rust
/// use spelunklib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "x = 1\ny = 2\n").unwrap();
/// fs::write(dir.path().join("b.c"), "int x;\n").unwrap();
///
/// let options = ScanOptions::new().language("Python");
/// let inventory = scan_directory(dir.path(), &options).unwrap();
/// assert_eq!(inventory.files("Python"), 1);
/// assert_eq!(inventory.lines("Python"), 2);
/// assert_eq!(inventory.files("C"), 0);
/// ```
pub fn scan_directory(root: impl AsRef<Path>, options: &ScanOptions) -> Result<Inventory> {
    let root = root.as_ref();
    let files = discover_files(root, options)?;

    let mut inventory = Inventory::new();
    for path in files {
        scan_file(root, &path, options, &mut inventory);
    }

    Ok(inventory)
}

/// Classify one file and, if it qualifies, fold it into the inventory.
fn scan_file(root: &Path, path: &Path, options: &ScanOptions, inventory: &mut Inventory) {
    // The file may have gone since the directory was listed
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            debug!(path = %path.display(), "skipping non-regular file");
            return;
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping inaccessible file");
            return;
        }
    }

    let relative = relative_path(root, path);
    let verdict = classify(&relative, &mut inventory.unresolved_extensions);

    let file_name = relative
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let always_skipped = split_last_extension(&file_name)
        .1
        .is_some_and(|ext| options.skips_extension(ext));

    let label = match verdict {
        Verdict::Label(label) if !always_skipped => label,
        verdict => {
            debug!(path = %relative.display(), %verdict, "excluding file");
            return;
        }
    };

    if !options.accepts_label(&label) {
        return;
    }

    let lines = match count_lines(path, options.encoding) {
        Ok(lines) => lines,
        Err(err) => {
            warn!(
                path = %relative.display(),
                error = %err,
                "could not read file, counting it with zero lines"
            );
            0
        }
    };

    let directory = relative.parent().unwrap_or(Path::new(SCAN_ROOT));
    inventory.record_file(&label, directory, lines);
}

/// Express `path` relative to the scan root, as `./a/b.c`.
///
/// Classification matches name fragments against this form, so directories
/// above the root (say `/tmp/`) never influence a verdict.
fn relative_path(root: &Path, path: &Path) -> PathBuf {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    Path::new(SCAN_ROOT).join(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: impl AsRef<[u8]>) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn lines(n: usize) -> String {
        (0..n).map(|i| format!("line {i}\n")).collect()
    }

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn assert_locations_match_files(inventory: &Inventory) {
        for (label, files) in &inventory.files_by_type {
            let located: u64 = inventory.locations_by_type[label].values().sum();
            assert_eq!(located, *files, "location sum mismatch for {label}");
        }
        assert_eq!(
            inventory.files_by_type.keys().collect::<Vec<_>>(),
            inventory.lines_by_type.keys().collect::<Vec<_>>()
        );
        assert_eq!(inventory.visited_locations, inventory.total_files());
    }

    #[test]
    fn test_scan_mixed_tree() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("src/main.c"), lines(12));
        write_file(&root.join("src/node_modules/lib.js"), lines(999));
        write_file(&root.join("Makefile"), lines(5));
        write_file(&root.join("README.xyz"), lines(3));

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();

        assert_eq!(inventory.files_by_type, counts(&[("C", 1), ("Makefile", 1)]));
        assert_eq!(inventory.lines_by_type, counts(&[("C", 12), ("Makefile", 5)]));
        assert!(inventory.unresolved_extensions.contains("xyz"));
        assert!(!inventory.files_by_type.contains_key("JavaScript"));
        assert_eq!(inventory.visited_locations, 2);
        assert_locations_match_files(&inventory);
    }

    #[test]
    fn test_scan_language_filter() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("tool.py"), lines(20));
        write_file(&root.join("core.c"), lines(10));

        let options = ScanOptions::new().language("Python");
        let inventory = scan_directory(root, &options).unwrap();

        assert_eq!(inventory.files_by_type, counts(&[("Python", 1)]));
        assert_eq!(inventory.lines_by_type, counts(&[("Python", 20)]));
        assert!(!inventory.locations_by_type.contains_key("C"));
        assert_eq!(inventory.visited_locations, 1);
    }

    #[test]
    fn test_scan_undecodable_file_counts_with_zero_lines() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("src/latin.c"), b"/* caf\xe9 */\nint x;\n");
        write_file(&root.join("src/ok.c"), lines(4));

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();

        assert_eq!(inventory.files("C"), 2);
        assert_eq!(inventory.lines("C"), 4);
        assert_eq!(
            inventory.locations("C").collect::<Vec<_>>(),
            vec![("./src", 2)]
        );
        assert_eq!(inventory.visited_locations, 2);
        assert_locations_match_files(&inventory);
    }

    #[test]
    fn test_scan_encoding_option() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("latin.c"), b"/* caf\xe9 */\nint x;\n");

        let options = ScanOptions::new().encoding(crate::data::lines::TextEncoding::Latin1);
        let inventory = scan_directory(temp.path(), &options).unwrap();
        assert_eq!(inventory.lines("C"), 2);
    }

    #[test]
    fn test_scan_pruned_dirs_contribute_nothing() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("app/main.py"), lines(2));
        write_file(&root.join("Vendor/dep.py"), lines(50));
        write_file(&root.join("Vendor/deeper/dep2.py"), lines(50));
        write_file(&root.join("BIN/tool.sh"), lines(7));
        write_file(&root.join("CVS/notes.py"), lines(9));

        let options = ScanOptions::new().exclude_dir("vendor");
        let inventory = scan_directory(root, &options).unwrap();

        assert_eq!(inventory.files_by_type, counts(&[("Python", 1)]));
        assert_eq!(inventory.lines_by_type, counts(&[("Python", 2)]));
        for dirs in inventory.locations_by_type.values() {
            for dir in dirs.keys() {
                let dir = dir.to_lowercase();
                assert!(!dir.contains("vendor") && !dir.contains("bin") && !dir.contains("cvs"));
            }
        }
    }

    #[test]
    fn test_scan_records_locations_per_directory() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("a.rs"), lines(1));
        write_file(&root.join("src/b.rs"), lines(1));
        write_file(&root.join("src/c.rs"), lines(1));
        write_file(&root.join("src/deep/d.rs"), lines(1));

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();

        let mut expected = BTreeMap::new();
        expected.insert(".".to_string(), 1);
        expected.insert("./src".to_string(), 2);
        expected.insert("./src/deep".to_string(), 1);
        assert_eq!(inventory.locations_by_type["Rust"], expected);
        assert_eq!(inventory.visited_locations, 4);
        assert_locations_match_files(&inventory);
    }

    #[test]
    fn test_scan_always_skipped_extensions() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("app.js"), lines(3));
        write_file(&root.join("logo.PNG"), b"\x89PNG");

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();
        assert_eq!(inventory.files_by_type, counts(&[("JavaScript", 1)]));

        // An always-skip extension wins even when the label table knows it
        let options = ScanOptions::new().skip_extensions(["js"]);
        let inventory = scan_directory(root, &options).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_scan_unknown_and_excluded_never_located() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("notes.txt"), lines(3));
        write_file(&root.join("LICENSE"), lines(3));
        write_file(&root.join("static/app.min.js"), lines(3));
        write_file(&root.join("manual.pdf"), lines(3));

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();

        assert!(inventory.is_empty());
        assert!(inventory.locations_by_type.is_empty());
        assert_eq!(inventory.visited_locations, 0);
        assert_eq!(
            inventory.unresolved_extensions.iter().collect::<Vec<_>>(),
            vec!["txt"]
        );
    }

    #[test]
    fn test_scan_empty_file() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("empty.sh"), "");

        let inventory = scan_directory(temp.path(), &ScanOptions::new()).unwrap();
        assert_eq!(inventory.files("Shell Script"), 1);
        assert_eq!(inventory.lines_by_type.get("Shell Script"), Some(&0));
    }

    #[test]
    fn test_scan_nonexistent_root() {
        let result = scan_directory("/nonexistent/path", &ScanOptions::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/work/repo"), Path::new("/work/repo/src/a.c")),
            PathBuf::from("./src/a.c")
        );
        assert_eq!(
            relative_path(Path::new("/work/repo"), Path::new("/work/repo/Makefile")),
            PathBuf::from("./Makefile")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_broken_symlink() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("real.c"), lines(2));
        std::os::unix::fs::symlink(root.join("gone.c"), root.join("dangling.c")).unwrap();

        let inventory = scan_directory(root, &ScanOptions::new()).unwrap();
        assert_eq!(inventory.files("C"), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_non_utf8_directory_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        let dir = temp.path().join(OsStr::from_bytes(b"caf\xe9"));
        write_file(&dir.join("a.c"), lines(3));

        let inventory = scan_directory(temp.path(), &ScanOptions::new()).unwrap();
        assert_eq!(inventory.files("C"), 1);
        assert_eq!(
            inventory.locations("C").collect::<Vec<_>>(),
            vec![("./caf\u{FFFD}", 1)]
        );

        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(json["locations_by_type"]["C"]["./caf\u{FFFD}"], 1);
    }
}
