//! Store reference table loading.
//!
//! Parses the tabular reference file (`Store,Type,Size` columns) into an
//! in-memory table keyed by store number. Loaded once and read-only for the
//! process lifetime.

use crate::types::store::{StoreCategory, StoreRecord};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read-only lookup table mapping store number to its reference record
pub struct StoreTable {
    records: BTreeMap<u32, StoreRecord>,
}

impl StoreTable {
    /// Load the reference table from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open store table {}", path.display()))?;

        let table = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            stores = table.len(),
            "Store reference table loaded"
        );
        Ok(table)
    }

    /// Parse reference rows from any buffered reader.
    ///
    /// Malformed rows are skipped with a warning; unknown category labels load
    /// as `None` (their one-hot encoding is all zeros) and are warned about
    /// here so the degradation is visible.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = BTreeMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read store table row")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // Header row
            if idx == 0 && line.starts_with("Store") {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 {
                warn!(row = idx + 1, "Skipping malformed store row");
                continue;
            }

            let store: u32 = match fields[0].trim().parse() {
                Ok(store) => store,
                Err(_) => {
                    warn!(row = idx + 1, value = fields[0], "Skipping row with invalid store number");
                    continue;
                }
            };
            let size: f64 = match fields[2].trim().parse() {
                Ok(size) => size,
                Err(_) => {
                    warn!(store, value = fields[2], "Skipping row with invalid size");
                    continue;
                }
            };

            let label = fields[1].trim();
            let category = StoreCategory::from_label(label);
            if category.is_none() {
                warn!(store, label, "Unknown store category label");
            }

            records.insert(store, StoreRecord { store, category, size });
        }

        if records.is_empty() {
            anyhow::bail!("Store table contained no usable rows");
        }

        Ok(Self { records })
    }

    /// Look up the reference record for a store number.
    pub fn get(&self, store: u32) -> Option<&StoreRecord> {
        self.records.get(&store)
    }

    /// Known store numbers in ascending order, for closed-set selection.
    pub fn store_numbers(&self) -> Vec<u32> {
        self.records.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
