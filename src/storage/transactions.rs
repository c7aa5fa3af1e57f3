//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. Transactions
//! keep their insertion order, which is the order an unsorted view shows.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
///
/// Every mutation writes the changed list to disk before it becomes visible
/// in memory. A failed write leaves the repository exactly as it was.
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.transactions;

        Ok(())
    }

    fn snapshot(&self) -> LedgerResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Persist `next`, then make it the in-memory state
    fn commit(&self, next: Vec<Transaction>) -> LedgerResult<()> {
        let file_data = TransactionData { transactions: next };
        write_json_atomic(&self.path, &file_data)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.transactions;
        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> LedgerResult<Vec<Transaction>> {
        self.snapshot()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|t| t.id.matches(identifier)).cloned())
    }

    /// Number of transactions whose category is exactly `name`
    pub fn count_by_category(&self, name: &str) -> LedgerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().filter(|t| t.category == name).count())
    }

    /// Append a new transaction
    pub fn insert(&self, txn: Transaction) -> LedgerResult<()> {
        let mut next = self.snapshot()?;
        if next.iter().any(|t| t.id == txn.id) {
            return Err(LedgerError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }
        next.push(txn);
        self.commit(next)
    }

    /// Replace an existing transaction in place
    pub fn update(&self, txn: Transaction) -> LedgerResult<()> {
        let mut next = self.snapshot()?;
        let slot = next
            .iter_mut()
            .find(|t| t.id == txn.id)
            .ok_or_else(|| LedgerError::transaction_not_found(txn.id.to_string()))?;
        *slot = txn;
        self.commit(next)
    }

    /// Delete every transaction in `ids` in a single write
    ///
    /// Returns the removed transactions. Unknown IDs are ignored.
    pub fn delete_many(&self, ids: &[TransactionId]) -> LedgerResult<Vec<Transaction>> {
        let current = self.snapshot()?;
        let (removed, kept): (Vec<_>, Vec<_>) =
            current.into_iter().partition(|t| ids.contains(&t.id));

        if removed.is_empty() {
            return Ok(removed);
        }

        self.commit(kept)?;
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> LedgerResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
