//! Inventory report: aggregates arranged for presentation.
//!
//! The report sits between the raw [`Inventory`] and the final table. It
//! orders the labels, computes the identified-code totals and, when asked,
//! lists where each label's files live.
//!
//! The data pipeline is:
//! 1. Raw data (`Inventory`)
//! 2. Report (ordered, totalled)
//! 3. Table (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::inventory::Inventory;

use super::options::{OrderBy, OrderDirection, Ordering};

/// Files of one label found in one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub directory: String,
    pub files: u64,
}

/// One report row: a label with its counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSummary {
    /// Language label
    pub label: String,
    /// Files counted for the label
    pub files: u64,
    /// Lines counted for the label
    pub lines: u64,
    /// Per-directory breakdown, sorted by directory (empty unless requested)
    pub locations: Vec<LocationSummary>,
}

/// Report built from an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// One row per label, ordered
    pub items: Vec<LabelSummary>,
    /// Files across all identified labels
    pub identified_files: u64,
    /// Lines across all identified labels
    pub identified_lines: u64,
    /// Files across the whole inventory
    pub total_files: u64,
    /// Lines across the whole inventory
    pub total_lines: u64,
    /// Files recorded into the location map (only with locations)
    pub directory_count: Option<u64>,
    /// Unresolved extensions, sorted
    pub unresolved_extensions: Vec<String>,
}

impl InventoryReport {
    /// Build a report from an inventory.
    ///
    /// With `include_locations`, every row lists its directories and the
    /// report carries the visited-location count.
    pub fn from_inventory(
        inventory: &Inventory,
        include_locations: bool,
        ordering: Ordering,
    ) -> Self {
        let mut items: Vec<LabelSummary> = inventory
            .labels()
            .map(|label| LabelSummary {
                label: label.to_string(),
                files: inventory.files(label),
                lines: inventory.lines(label),
                locations: if include_locations {
                    inventory
                        .locations(label)
                        .map(|(directory, files)| LocationSummary {
                            directory: directory.to_string(),
                            files,
                        })
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        sort_items(&mut items, ordering);

        InventoryReport {
            identified_files: items.iter().map(|i| i.files).sum(),
            identified_lines: items.iter().map(|i| i.lines).sum(),
            total_files: inventory.total_files(),
            total_lines: inventory.total_lines(),
            items,
            directory_count: include_locations.then_some(inventory.visited_locations),
            unresolved_extensions: inventory
                .unresolved_extensions
                .iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Sort rows; ties on a count fall back to label order.
fn sort_items(items: &mut [LabelSummary], ordering: Ordering) {
    items.sort_by(|a, b| {
        let cmp = match ordering.by {
            OrderBy::Label => a.label.cmp(&b.label),
            OrderBy::Files => a.files.cmp(&b.files),
            OrderBy::Lines => a.lines.cmp(&b.lines),
        };
        let cmp = match ordering.direction {
            OrderDirection::Ascending => cmp,
            OrderDirection::Descending => cmp.reverse(),
        };
        cmp.then_with(|| a.label.cmp(&b.label))
    });
}
