//! Category service
//!
//! Adding and removing names from the category set. Transactions refer to
//! categories by name and are never touched here: deleting a category that is
//! still in use leaves its name on those transactions.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// A category together with how many transactions use it
#[derive(Debug, Clone)]
pub struct CategoryUsage {
    pub category: Category,
    pub transaction_count: usize,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All categories in order
    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// All categories with their usage counts
    pub fn list_with_usage(&self) -> LedgerResult<Vec<CategoryUsage>> {
        self.list()?
            .into_iter()
            .map(|category| {
                let transaction_count =
                    self.storage.transactions.count_by_category(&category.name)?;
                Ok(CategoryUsage {
                    category,
                    transaction_count,
                })
            })
            .collect()
    }

    /// Add a category
    ///
    /// The name is trimmed; the returned category carries the stored name.
    pub fn add(&self, name: &str) -> LedgerResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let category = self.storage.categories.insert(category)?;

        self.storage.log_create(
            EntityType::Category,
            category.id.short(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Delete a category by name or ID
    ///
    /// A category used by transactions is only deleted once confirmed; the
    /// confirmation message carries the number of affected transactions.
    pub fn delete(&self, identifier: &str, confirmed: bool) -> LedgerResult<Category> {
        let category = self
            .storage
            .categories
            .find(identifier)?
            .ok_or_else(|| LedgerError::category_not_found(identifier))?;

        let in_use = self.storage.transactions.count_by_category(&category.name)?;
        if in_use > 0 && !confirmed {
            return Err(LedgerError::ConfirmationRequired(format!(
                "Category '{}' is used by {} transaction(s). They will be kept with \
                 their current category name.",
                category.name, in_use
            )));
        }

        self.storage.categories.delete(category.id)?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.short(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }
}
