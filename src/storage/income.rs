//! Income record repository
//!
//! Records are keyed by period, so there is never more than one per period:
//! saving a record for a period replaces whatever was stored for it.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{IncomeRecord, Money, Period};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    records: Vec<IncomeRecord>,
}

/// Repository for per-period income records
pub struct IncomeRepository {
    path: PathBuf,
    records: RwLock<BTreeMap<Period, IncomeRecord>>,
}

impl IncomeRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load records from disk
    ///
    /// If the file holds several records for one period the last one wins.
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.clear();
        for record in file_data.records {
            records.insert(record.period, record);
        }

        Ok(())
    }

    /// Get the income record for a period
    pub fn get_for_period(&self, period: Period) -> LedgerResult<Option<IncomeRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.get(&period).cloned())
    }

    /// Income amount for a period, zero when no record exists
    pub fn amount_for_period(&self, period: Period) -> LedgerResult<Money> {
        Ok(self
            .get_for_period(period)?
            .map(|r| r.amount)
            .unwrap_or_default())
    }

    /// Insert the record, replacing any record stored for the same period
    ///
    /// Returns the record it replaced.
    pub fn upsert(&self, record: IncomeRecord) -> LedgerResult<Option<IncomeRecord>> {
        let mut next = {
            let records = self.records.read().map_err(|e| {
                LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            records.clone()
        };

        let previous = next.insert(record.period, record);

        let file_data = IncomeData {
            records: next.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *records = next;

        Ok(previous)
    }

    /// Get all income records, oldest period first
    pub fn get_all(&self) -> LedgerResult<Vec<IncomeRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(records.values().cloned().collect())
    }
}
