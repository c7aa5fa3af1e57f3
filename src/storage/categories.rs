//! Category repository for JSON storage
//!
//! Manages loading and saving the ordered category set to categories.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for the category set
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk, ordered by sort order
    pub fn load(&self) -> LedgerResult<()> {
        let mut file_data: CategoryData = read_json(&self.path)?;
        file_data.categories.sort_by_key(|c| c.sort_order);

        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = file_data.categories;

        Ok(())
    }

    fn snapshot(&self) -> LedgerResult<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.clone())
    }

    /// Persist `next`, then make it the in-memory state
    fn commit(&self, next: Vec<Category>) -> LedgerResult<()> {
        let file_data = CategoryData { categories: next };
        write_json_atomic(&self.path, &file_data)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = file_data.categories;
        Ok(())
    }

    /// Get all categories in order
    pub fn get_all(&self) -> LedgerResult<Vec<Category>> {
        self.snapshot()
    }

    /// Category names in order
    pub fn names(&self) -> LedgerResult<Vec<String>> {
        Ok(self.snapshot()?.into_iter().map(|c| c.name).collect())
    }

    /// Get a category by exact (case-sensitive) name
    pub fn get_by_name(&self, name: &str) -> LedgerResult<Option<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.iter().find(|c| c.name == name).cloned())
    }

    /// Find a category by exact name or by ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Category>> {
        if let Some(category) = self.get_by_name(identifier)? {
            return Ok(Some(category));
        }
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.iter().find(|c| c.id.matches(identifier)).cloned())
    }

    /// Append a category at the end of the set
    ///
    /// Fails with `Duplicate` if the name is already present.
    pub fn insert(&self, mut category: Category) -> LedgerResult<Category> {
        let mut next = self.snapshot()?;
        if next.iter().any(|c| c.name == category.name) {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: category.name,
            });
        }

        category.sort_order = next.iter().map(|c| c.sort_order + 1).max().unwrap_or(0);
        next.push(category.clone());
        self.commit(next)?;
        Ok(category)
    }

    /// Remove a category; returns whether it existed
    pub fn delete(&self, id: CategoryId) -> LedgerResult<bool> {
        let mut next = self.snapshot()?;
        let before = next.len();
        next.retain(|c| c.id != id);
        if next.len() == before {
            return Ok(false);
        }
        self.commit(next)?;
        Ok(true)
    }

    /// Replace the whole set, used when seeding defaults
    pub fn replace_all(&self, categories: Vec<Category>) -> LedgerResult<()> {
        self.commit(categories)
    }

    /// Count categories
    pub fn count(&self) -> LedgerResult<usize> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}
