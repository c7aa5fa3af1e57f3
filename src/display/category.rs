//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::CategoryUsage;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "In use")]
    transactions: usize,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format the category set with usage counts
pub fn format_category_list(categories: &[CategoryUsage]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'ledger init' to create the default categories.\n"
            .to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .enumerate()
        .map(|(i, usage)| CategoryRow {
            position: i + 1,
            name: usage.category.name.clone(),
            transactions: usage.transaction_count,
            id: usage.category.id.short(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}
