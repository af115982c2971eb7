//! Query processing: order and total the inventory.
//!
//! This module handles the third stage of the pipeline - transforming the
//! raw inventory into report rows. It provides:
//!
//! - **Options**: ordering of rows (`Ordering`)
//! - **Report**: ordered rows with totals and optional locations
//!
//! ## Example
//!
//! ```rust,ignore
//! use spelunklib::query::{InventoryReport, Ordering};
//!
//! let report = InventoryReport::from_inventory(&inventory, true, Ordering::by_lines());
//! ```

pub mod options;
pub mod report;

pub use options::{OrderBy, OrderDirection, Ordering};
pub use report::{InventoryReport, LabelSummary, LocationSummary};
