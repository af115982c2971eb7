//! Output formatting: present the inventory as a table.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting report rows for display. It provides:
//!
//! - **InventoryTable**: headers, label rows, identified and grand totals,
//!   diagnostics
//! - **TableRow** / **LocationRow**: individual rows as display strings
//!
//! InventoryTable is a pure presentation layer. It holds strings, never
//! markup; choosing plain text, HTML or LaTeX is the renderer's job.
//!
//! ## Example
//!
//! ```rust,ignore
//! use spelunklib::output::InventoryTable;
//!
//! let table = InventoryTable::from_report(&report);
//! // table.headers: ["Type", "Files", "Lines"]
//! // table.rows: [TableRow { label: "C", values: ["1", "12"], .. }]
//! // table.footer: TableRow { label: "Identified Code", .. }
//! ```

pub mod table;

pub use table::{
    InventoryTable, LocationRow, TableRow, DIRECTORIES_LABEL, IDENTIFIED_LABEL, TOTAL_LABEL,
};
