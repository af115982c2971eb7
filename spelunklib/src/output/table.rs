//! Table-ready data structures for inventory output.
//!
//! `InventoryTable` is a presentation-ready structure that a renderer can walk
//! directly, whatever its layout (plain text, HTML, LaTeX), or serialize to
//! JSON.
//!
//! The data flow is:
//! 1. Raw data (`Inventory`)
//! 2. Report (ordered, totalled)
//! 3. InventoryTable (formatted strings for display)
//!
//! InventoryTable only formats values. No ordering or totalling happens here.

use serde::{Deserialize, Serialize};

use crate::query::report::InventoryReport;

/// Label of the summary row totalling every recognised label.
pub const IDENTIFIED_LABEL: &str = "Identified Code";

/// Label of the grand-total row.
pub const TOTAL_LABEL: &str = "Total";

/// Label of the row holding the visited-location count.
pub const DIRECTORIES_LABEL: &str = "Number of directories";

/// A directory row under a label row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRow {
    /// Directory, relative to the scan root
    pub directory: String,
    /// Files of the parent label in that directory
    pub files: String,
}

/// A single row in the table (data row or summary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (language, "Identified Code", etc.)
    pub label: String,
    /// Values for each count column
    pub values: Vec<String>,
    /// Directory breakdown (empty unless locations were requested)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub locations: Vec<LocationRow>,
}

/// Table-ready inventory data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTable {
    /// Column headers: [label header, Files, Lines]
    pub headers: Vec<String>,
    /// One row per label
    pub rows: Vec<TableRow>,
    /// Identified-code totals
    pub footer: TableRow,
    /// Totals over everything counted
    pub total: TableRow,
    /// Visited-location count, when locations were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<TableRow>,
    /// Comma-separated unresolved extensions, when there are any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved_extensions: Option<String>,
}

impl InventoryTable {
    /// Create an InventoryTable from a report.
    pub fn from_report(report: &InventoryReport) -> Self {
        let rows = report
            .items
            .iter()
            .map(|item| TableRow {
                label: item.label.clone(),
                values: vec![item.files.to_string(), item.lines.to_string()],
                locations: item
                    .locations
                    .iter()
                    .map(|loc| LocationRow {
                        directory: loc.directory.clone(),
                        files: loc.files.to_string(),
                    })
                    .collect(),
            })
            .collect();

        let footer = TableRow {
            label: IDENTIFIED_LABEL.to_string(),
            values: vec![
                report.identified_files.to_string(),
                report.identified_lines.to_string(),
            ],
            locations: Vec::new(),
        };

        let total = TableRow {
            label: TOTAL_LABEL.to_string(),
            values: vec![report.total_files.to_string(), report.total_lines.to_string()],
            locations: Vec::new(),
        };

        let directories = report.directory_count.map(|count| TableRow {
            label: DIRECTORIES_LABEL.to_string(),
            values: vec![count.to_string()],
            locations: Vec::new(),
        });

        let unresolved_extensions = if report.unresolved_extensions.is_empty() {
            None
        } else {
            Some(report.unresolved_extensions.join(", "))
        };

        InventoryTable {
            headers: vec!["Type".to_string(), "Files".to_string(), "Lines".to_string()],
            rows,
            footer,
            total,
            directories,
            unresolved_extensions,
        }
    }
}
