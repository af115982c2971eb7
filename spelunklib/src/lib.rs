//! # spelunklib
//!
//! A first-pass "what's in this codebase" inventory: files and lines of source
//! code by language, and optionally where each language lives.
//!
//! ## Overview
//!
//! The library walks a directory tree exactly once. Each file is classified
//! from its name alone into a language label, `Unknown`, or an `Excluded`
//! verdict (vendored libraries, minified assets, binary formats). Eligible
//! files have their lines counted, and the results fold into an [`Inventory`]:
//!
//! - **files by type**: how many files carry each label
//! - **lines by type**: how many lines those files hold
//! - **locations by type**: for each label, how many files sit in each directory
//! - **unresolved extensions**: extensions seen but not in the label table
//!
//! ## Pipeline
//!
//! - [`source`]: scan options and the pruned directory walk
//! - [`data`]: classification, line counting and aggregation
//! - [`query`]: sorted, totalled report rows
//! - [`output`]: table cells ready for a renderer
//!
//! The library never produces formatted markup; that is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use spelunklib::{scan_directory, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/main.c"), "int main(void)\n{\n}\n").unwrap();
//! fs::write(dir.path().join("Makefile"), "all:\n\tcc src/main.c\n").unwrap();
//!
//! let inventory = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
//! assert_eq!(inventory.files_by_type["C"], 1);
//! assert_eq!(inventory.lines_by_type["C"], 3);
//! assert_eq!(inventory.lines_by_type["Makefile"], 2);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    classify, count_lines, scan_directory, ExclusionReason, Inventory, TextEncoding,
    UnresolvedExtensions, Verdict,
};
pub use error::SpelunkError;
pub use output::{InventoryTable, LocationRow, TableRow};
pub use query::{
    InventoryReport, LabelSummary, LocationSummary, OrderBy, OrderDirection, Ordering,
};
pub use source::{ScanOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_SKIP_EXTENSIONS};

/// Result type for spelunklib operations
pub type Result<T> = std::result::Result<T, SpelunkError>;
