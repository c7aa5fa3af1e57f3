//! Storage initialization
//!
//! First-run setup: directories, default settings and the default category set.

use crate::config::paths::LedgerPaths;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{Category, DEFAULT_CATEGORIES};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing settings and categories are left alone, so running it twice is
/// harmless. Returns `true` when the default categories were created.
pub fn initialize_storage(paths: &LedgerPaths) -> LedgerResult<bool> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if needs_default_categories(paths) {
        create_default_categories(paths)?;
        return Ok(true);
    }

    Ok(false)
}

fn create_default_categories(paths: &LedgerPaths) -> LedgerResult<()> {
    let categories = DEFAULT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::with_sort_order(*name, i as i32))
        .collect();

    write_json_atomic(paths.categories_file(), &CategoryData { categories })
}

/// Check if the category file still has to be seeded
pub fn needs_default_categories(paths: &LedgerPaths) -> bool {
    !paths.categories_file().exists()
}
