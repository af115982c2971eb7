//! Data collection: classify files and aggregate their counts.
//!
//! This module handles the second stage of the pipeline - deciding what each
//! file is and folding the countable ones into an inventory. It provides:
//!
//! - **Classification**: name-based verdicts (`classify`, `Verdict`)
//! - **Tables**: extension labels, exclusion fragments, MIME sets
//! - **Line counting**: encoding-checked line counts (`count_lines`)
//! - **Scanning**: the single-pass walker/aggregator (`scan_directory`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use spelunklib::data::{scan_directory, Inventory};
//! use spelunklib::ScanOptions;
//!
//! let inventory: Inventory = scan_directory(".", &ScanOptions::new())?;
//! println!("C files: {}", inventory.files("C"));
//! ```

pub mod classify;
pub mod counter;
pub mod inventory;
pub mod language;
pub mod lines;

pub use classify::{classify, ExclusionReason, UnresolvedExtensions, Verdict};
pub use counter::scan_directory;
pub use inventory::Inventory;
pub use lines::{count_lines, count_lines_in, TextEncoding};
