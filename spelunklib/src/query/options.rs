//! Options controlling how an inventory is presented.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field to order report rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order by language label (lexicographical)
    #[default]
    Label,
    /// Order by file count
    Files,
    /// Order by line count
    Lines,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "label" => Ok(OrderBy::Label),
            "files" => Ok(OrderBy::Files),
            "lines" => Ok(OrderBy::Lines),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

/// Ordering configuration for report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by
    pub by: OrderBy,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Default for Ordering {
    fn default() -> Self {
        Self {
            by: OrderBy::Label,
            direction: OrderDirection::Ascending,
        }
    }
}

impl Ordering {
    /// Order by label ascending (default)
    pub fn by_label() -> Self {
        Self::default()
    }

    /// Order by file count, largest first
    pub fn by_files() -> Self {
        Self {
            by: OrderBy::Files,
            direction: OrderDirection::Descending,
        }
    }

    /// Order by line count, largest first
    pub fn by_lines() -> Self {
        Self {
            by: OrderBy::Lines,
            direction: OrderDirection::Descending,
        }
    }

    /// Natural ordering for a field: labels ascending, counts descending.
    pub fn natural(by: OrderBy) -> Self {
        match by {
            OrderBy::Label => Self::by_label(),
            OrderBy::Files => Self::by_files(),
            OrderBy::Lines => Self::by_lines(),
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_default() {
        let ordering = Ordering::default();
        assert_eq!(ordering.by, OrderBy::Label);
        assert_eq!(ordering.direction, OrderDirection::Ascending);
    }

    #[test]
    fn test_ordering_natural() {
        assert_eq!(Ordering::natural(OrderBy::Lines), Ordering::by_lines());
        assert_eq!(
            Ordering::natural(OrderBy::Files).direction,
            OrderDirection::Descending
        );
    }

    #[test]
    fn test_ordering_direction_builder() {
        let ordering = Ordering::by_lines().ascending();
        assert_eq!(ordering.by, OrderBy::Lines);
        assert_eq!(ordering.direction, OrderDirection::Ascending);
    }

    #[test]
    fn test_order_by_from_str() {
        assert_eq!(OrderBy::from_str("files").unwrap(), OrderBy::Files);
        assert_eq!(OrderBy::from_str("Lines").unwrap(), OrderBy::Lines);
        assert_eq!(OrderBy::from_str("LABEL").unwrap(), OrderBy::Label);
        assert!(OrderBy::from_str("size").is_err());
    }
}
