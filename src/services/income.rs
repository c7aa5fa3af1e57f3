//! Income service
//!
//! Saves the income figure for a period. Saving twice for the same period
//! updates the existing record instead of creating a second one.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{IncomeRecord, Money, Period};
use crate::storage::Storage;

/// Service for per-period income records
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the income for a period
    ///
    /// A `None` description keeps the current one on update.
    pub fn save(
        &self,
        period: Period,
        amount: Money,
        description: Option<String>,
    ) -> LedgerResult<IncomeRecord> {
        let existing = self.storage.income.get_for_period(period)?;

        let mut record = existing
            .clone()
            .unwrap_or_else(|| IncomeRecord::new(period, amount));
        record.set_amount(amount);
        if let Some(description) = description {
            record.set_description(description.trim());
        }

        record
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.income.upsert(record.clone())?;

        match existing {
            Some(before) => self.storage.log_update(
                EntityType::IncomeRecord,
                record.id.short(),
                Some(period.to_string()),
                &before,
                &record,
            )?,
            None => self.storage.log_create(
                EntityType::IncomeRecord,
                record.id.short(),
                Some(period.to_string()),
                &record,
            )?,
        }

        Ok(record)
    }

    /// The income record for a period, if one was saved
    pub fn get(&self, period: Period) -> LedgerResult<Option<IncomeRecord>> {
        self.storage.income.get_for_period(period)
    }

    /// The income for a period, zero when none was saved
    pub fn amount_for(&self, period: Period) -> LedgerResult<Money> {
        self.storage.income.amount_for_period(period)
    }

    /// All income records, oldest period first
    pub fn list(&self) -> LedgerResult<Vec<IncomeRecord>> {
        self.storage.income.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn period(s: &str) -> Period {
        Period::parse(s).unwrap()
    }

    #[test]
    fn test_save_creates_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let record = service
            .save(period("2025-01"), Money::from_cents(500000), Some("Salário".into()))
            .unwrap();

        assert_eq!(record.amount.cents(), 500000);
        assert_eq!(record.description, "Salário");
        assert_eq!(service.amount_for(period("2025-01")).unwrap().cents(), 500000);
    }

    #[test]
    fn test_save_updates_existing_record() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let first = service
            .save(period("2025-01"), Money::from_cents(500000), Some("Salário".into()))
            .unwrap();
        let second = service
            .save(period("2025-01"), Money::from_cents(550000), None)
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.description, "Salário");
        assert_eq!(service.list().unwrap().len(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
    }

    #[test]
    fn test_missing_period_is_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        assert!(service.get(period("2025-03")).unwrap().is_none());
        assert!(service.amount_for(period("2025-03")).unwrap().is_zero());
    }

    #[test]
    fn test_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let err = service
            .save(period("2025-01"), Money::from_cents(-1), None)
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .save(period("2025-01"), Money::from_cents(100), Some("x".repeat(101)))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(service.list().unwrap().is_empty());
    }
}
