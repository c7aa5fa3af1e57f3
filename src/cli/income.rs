//! Income CLI commands
//!
//! Implements CLI commands for the income recorded against each period.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::{resolve_period, IncomeService};
use crate::state::AppState;
use crate::storage::Storage;

use super::transaction::parse_amount;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the income for a period
    Set {
        /// Income amount (e.g. "5000" or "5000,00")
        amount: String,

        /// Period (defaults to the selected one)
        #[arg(short, long)]
        period: Option<String>,

        /// Description (up to 100 characters)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show the income for a period
    Show {
        /// Period (defaults to the selected one)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List every recorded income
    List,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    state: &AppState,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let service = IncomeService::new(storage);
    let current = Period::current();
    let selected = state.period(current);

    let target = |period: Option<String>| -> LedgerResult<Period> {
        match period {
            Some(p) => resolve_period(&p, selected, current),
            None => Ok(selected),
        }
    };

    match cmd {
        IncomeCommands::Set {
            amount,
            period,
            description,
        } => {
            let period = target(period)?;
            let amount = parse_amount(&amount)?;
            let record = service.save(period, amount, description)?;

            println!(
                "Income for {}: {}",
                settings.locale.period_title(period),
                settings.format_money(record.amount)
            );
            if !record.description.is_empty() {
                println!("  {}", record.description);
            }
        }

        IncomeCommands::Show { period } => {
            let period = target(period)?;
            match service.get(period)? {
                Some(record) => {
                    println!(
                        "Income for {}: {}",
                        settings.locale.period_title(period),
                        settings.format_money(record.amount)
                    );
                    if !record.description.is_empty() {
                        println!("  {}", record.description);
                    }
                }
                None => {
                    println!(
                        "No income recorded for {}.",
                        settings.locale.period_title(period)
                    );
                }
            }
        }

        IncomeCommands::List => {
            let records = service.list()?;
            if records.is_empty() {
                println!("No income recorded.");
            }
            for record in records {
                println!(
                    "{}  {:>14}  {}",
                    record.period,
                    settings.format_money(record.amount),
                    record.description
                );
            }
        }
    }

    Ok(())
}
