//! Store reference data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store category code from the reference table (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreCategory {
    A,
    B,
    C,
}

impl StoreCategory {
    /// Parse a reference-table label by exact match.
    ///
    /// Labels outside the known set return `None`; the one-hot encoding for
    /// such a record is all zeros.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "A" => Some(StoreCategory::A),
            "B" => Some(StoreCategory::B),
            "C" => Some(StoreCategory::C),
            _ => None,
        }
    }
}

impl fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreCategory::A => write!(f, "A"),
            StoreCategory::B => write!(f, "B"),
            StoreCategory::C => write!(f, "C"),
        }
    }
}

/// One row of the store reference table, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Store number
    pub store: u32,

    /// Category label; `None` when the table carried an unknown label
    pub category: Option<StoreCategory>,

    /// Floor area in square feet
    pub size: f64,
}

/// Store attributes fed to the feature assembler.
///
/// Either looked up from the reference table or the configured fallback pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreAttributes {
    pub size: f64,
    pub category: Option<StoreCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(StoreCategory::from_label("A"), Some(StoreCategory::A));
        assert_eq!(StoreCategory::from_label("B"), Some(StoreCategory::B));
        assert_eq!(StoreCategory::from_label("C"), Some(StoreCategory::C));
        assert_eq!(StoreCategory::from_label("D"), None);
        assert_eq!(StoreCategory::from_label("a"), None);
        assert_eq!(StoreCategory::from_label(""), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(StoreCategory::A.to_string(), "A");
        assert_eq!(StoreCategory::C.to_string(), "C");
    }
}
