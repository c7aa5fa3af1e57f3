//! Transaction display formatting
//!
//! Renders the transaction table for a period, marking selected rows and
//! flagging dates that could not be read.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;
use crate::services::SortState;
use crate::state::AppState;

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "")]
    selected: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Date as shown in the table, or the raw value marked with `!`
pub fn format_date(txn: &Transaction, settings: &Settings) -> String {
    match txn.calendar_date() {
        Some(date) => date.format(settings.display_date_format()).to_string(),
        None if txn.date.is_empty() => "! (none)".to_string(),
        None => format!("! {}", txn.date),
    }
}

/// Format the transaction table
pub fn format_transaction_table(
    transactions: &[Transaction],
    state: &AppState,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            selected: if state.is_selected(txn.id) { "●" } else { "" },
            id: txn.id.short(),
            date: format_date(txn, settings),
            title: txn.title.clone(),
            category: txn.category.clone(),
            amount: settings.format_money(txn.amount),
            description: truncate(&txn.description, 30),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// One-line description of the active sort
pub fn format_sort_state(sort: &SortState) -> String {
    match sort.active() {
        Some(active) => format!("Sorted by {} ({})", active.field, active.direction),
        None => "Unsorted (stored order)".to_string(),
    }
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", format_date(txn, settings)));
    output.push_str(&format!("Amount:      {}\n", settings.format_money(txn.amount)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
