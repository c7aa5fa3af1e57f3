//! Transaction service
//!
//! Entry points for adding, editing and deleting expenses. Input is validated
//! before anything is written; edits and deletions only go through once the
//! caller confirms them.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, Transaction, TransactionFields, TransactionId};
use crate::storage::Storage;

use super::period::filter_by_period;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All transactions in stored order
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions dated within `period`, in stored order
    pub fn list_for_period(&self, period: Period) -> LedgerResult<Vec<Transaction>> {
        Ok(filter_by_period(&self.list()?, period))
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Transaction> {
        self.storage
            .transactions
            .find(identifier)?
            .ok_or_else(|| LedgerError::transaction_not_found(identifier))
    }

    /// Add a new transaction
    pub fn add(&self, fields: TransactionFields) -> LedgerResult<Transaction> {
        let fields = fields.normalized();
        fields
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.ensure_category_exists(&fields.category)?;

        let txn = Transaction::new(fields);
        self.storage.transactions.insert(txn.clone())?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.short(),
            Some(txn.title.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Replace every editable field of an existing transaction
    ///
    /// The category may stay a name that was since deleted; changing it
    /// requires a name from the current set.
    pub fn edit(
        &self,
        id: TransactionId,
        fields: TransactionFields,
        confirmed: bool,
    ) -> LedgerResult<Transaction> {
        let before = self.get(id)?;

        let fields = fields.normalized();
        fields
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        if fields.category != before.category {
            self.ensure_category_exists(&fields.category)?;
        }

        if !confirmed {
            return Err(LedgerError::ConfirmationRequired(format!(
                "Save changes to '{}'?",
                before.title
            )));
        }

        let mut updated = before.clone();
        updated.apply(fields);
        self.storage.transactions.update(updated.clone())?;

        self.storage.log_update(
            EntityType::Transaction,
            updated.id.short(),
            Some(updated.title.clone()),
            &before,
            &updated,
        )?;

        Ok(updated)
    }

    /// Delete a set of transactions in one step
    ///
    /// Every ID must exist; nothing is deleted otherwise.
    pub fn delete(&self, ids: &[TransactionId], confirmed: bool) -> LedgerResult<Vec<Transaction>> {
        if ids.is_empty() {
            return Err(LedgerError::Validation("No transactions selected".into()));
        }

        for id in ids {
            if self.storage.transactions.get(*id)?.is_none() {
                return Err(LedgerError::transaction_not_found(id.to_string()));
            }
        }

        if !confirmed {
            return Err(LedgerError::ConfirmationRequired(format!(
                "Delete {} transaction(s)?",
                ids.len()
            )));
        }

        let removed = self.storage.transactions.delete_many(ids)?;

        for txn in &removed {
            self.storage.log_delete(
                EntityType::Transaction,
                txn.id.short(),
                Some(txn.title.clone()),
                txn,
            )?;
        }

        Ok(removed)
    }

    fn ensure_category_exists(&self, name: &str) -> LedgerResult<()> {
        if self.storage.categories.get_by_name(name)?.is_none() {
            return Err(LedgerError::Validation(format!(
                "Unknown category '{}'",
                name
            )));
        }
        Ok(())
    }
}
