//! Source discovery: find the files a scan will consider.
//!
//! This module handles the first stage of the pipeline - deciding which parts
//! of the tree are visited at all. It provides:
//!
//! - **Scan options**: the explicit parameters of one run (`ScanOptions`)
//! - **Directory pruning**: excluded directory names are cut from the walk
//!   before they are ever opened
//!
//! ## Example
//!
//! ```rust,ignore
//! use spelunklib::source::{discover_files, ScanOptions};
//!
//! let options = ScanOptions::new().exclude_dir("vendor");
//! let files = discover_files(".", &options)?;
//! ```

pub mod filter;
pub mod options;

pub use filter::{discover_files, LEGACY_VCS_DIR};
pub use options::{ScanOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_SKIP_EXTENSIONS};
