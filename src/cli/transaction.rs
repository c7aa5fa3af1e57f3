//! Transaction CLI commands
//!
//! Adding, editing, deleting, listing, sorting and selecting expenses.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_sort_state, format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::DATE_FORMAT;
use crate::models::{Money, Period, Transaction, TransactionFields, TransactionId};
use crate::services::{resolve_period, undated_transactions, SortField, TransactionService};
use crate::state::AppState;
use crate::storage::Storage;

use super::confirm_or_report;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new expense
    Add {
        /// Title (up to 20 characters)
        title: String,
        /// Amount (e.g. "350,80" or "R$ 350.80")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description (up to 100 characters)
        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a transaction (the selected one if no ID is given)
    Edit {
        /// Transaction ID
        id: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Save without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Delete transactions (the selection if no IDs are given)
    Delete {
        /// Transaction IDs
        ids: Vec<String>,
        /// Delete without asking
        #[arg(short, long)]
        force: bool,
    },

    /// List the selected period's transactions
    List {
        /// Period to show instead of the selected one (YYYY-MM, prev, next)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Sort the table by a column; repeat to cycle asc, desc, unsorted
    Sort {
        /// title, amount, category, date or description
        field: String,
    },

    /// Select rows for editing or bulk deletion
    Select {
        /// Transaction IDs
        ids: Vec<String>,
        /// Select every row of the current view
        #[arg(long, conflicts_with_all = ["clear", "deselect"])]
        all: bool,
        /// Clear the selection
        #[arg(long, conflicts_with = "deselect")]
        clear: bool,
        /// Remove the given IDs from the selection
        #[arg(long)]
        deselect: bool,
    },

    /// Show a transaction
    Show {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    state: &mut AppState,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = TransactionService::new(storage);
    let current = Period::current();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            date,
            description,
        } => {
            let fields = TransactionFields {
                title,
                amount: parse_amount(&amount)?,
                category,
                date: date.unwrap_or_else(|| {
                    Local::now().date_naive().format(DATE_FORMAT).to_string()
                }),
                description: description.unwrap_or_default(),
            };

            let txn = service.add(fields)?;
            state.clear_selection();

            println!("Added transaction: {}", txn.title);
            println!("  Amount:   {}", settings.format_money(txn.amount));
            println!("  Category: {}", txn.category);
            println!("  Date:     {}", txn.date);
            println!("  ID:       {}", txn.id.short());
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
            description,
            force,
        } => {
            let target = match id {
                Some(identifier) => service.find(&identifier)?,
                None => service.get(state.edit_target()?)?,
            };

            let mut fields = target.fields();
            if let Some(title) = title {
                fields.title = title;
            }
            if let Some(amount) = amount {
                fields.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                fields.category = category;
            }
            if let Some(date) = date {
                fields.date = date;
            }
            if let Some(description) = description {
                fields.description = description;
            }

            if let Some(updated) = confirm_or_report(service.edit(target.id, fields, force))? {
                state.clear_selection();
                println!("Updated transaction: {}", updated.id.short());
                print!("{}", format_transaction_details(&updated, settings));
            }
        }

        TransactionCommands::Delete { ids, force } => {
            let ids = if ids.is_empty() {
                state.selected.clone()
            } else {
                resolve_ids(&service, &ids)?
            };

            if let Some(removed) = confirm_or_report(service.delete(&ids, force))? {
                state.clear_selection();
                println!("Deleted {} transaction(s):", removed.len());
                for txn in &removed {
                    println!("  {} {}", txn.id.short(), txn.title);
                }
            }
        }

        TransactionCommands::List { period } => {
            let viewing = match period {
                Some(p) => resolve_period(&p, state.period(current), current)?,
                None => state.period(current),
            };

            let all = service.list()?;
            let mut view_state = state.clone();
            view_state.selected_period = Some(viewing);
            print_view(&all, &view_state, settings, current);

            let undated = undated_transactions(&all);
            if !undated.is_empty() {
                println!();
                println!(
                    "Warning: {} transaction(s) have a missing or invalid date and appear in no period:",
                    undated.len()
                );
                for txn in undated {
                    println!("  {} {}", txn.id.short(), txn.title);
                }
            }
        }

        TransactionCommands::Sort { field } => {
            let field: SortField = field.parse().map_err(LedgerError::Validation)?;
            state.toggle_sort(field);

            let all = service.list()?;
            print_view(&all, state, settings, current);
        }

        TransactionCommands::Select {
            ids,
            all,
            clear,
            deselect,
        } => {
            let transactions = service.list()?;

            if clear {
                state.clear_selection();
            } else if all {
                let view = state.view(&transactions, current);
                state.select_all(&view);
            } else {
                if ids.is_empty() {
                    return Err(LedgerError::Validation(
                        "Give transaction IDs, --all or --clear".into(),
                    ));
                }
                for id in resolve_ids(&service, &ids)? {
                    if deselect {
                        state.deselect(id);
                    } else {
                        state.select(id);
                    }
                }
            }

            println!("{} transaction(s) selected", state.selected.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }
    }

    Ok(())
}

fn print_view(
    transactions: &[Transaction],
    state: &AppState,
    settings: &Settings,
    current: Period,
) {
    let period = state.period(current);
    let view = state.view(transactions, current);
    let total: Money = view.iter().map(|t| t.amount).sum();

    println!("{}", settings.locale.period_title(period));
    println!("{}", format_sort_state(&state.sort));
    print!("{}", format_transaction_table(&view, state, settings));
    println!(
        "{} transaction(s), total {}",
        view.len(),
        settings.format_money(total)
    );
}

fn resolve_ids(
    service: &TransactionService<'_>,
    identifiers: &[String],
) -> LedgerResult<Vec<TransactionId>> {
    identifiers
        .iter()
        .map(|identifier| service.find(identifier).map(|t| t.id))
        .collect()
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))
}
