//! Period CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::{available_periods, resolve_period};
use crate::state::AppState;
use crate::storage::Storage;

/// Period subcommands
#[derive(Subcommand)]
pub enum PeriodCommands {
    /// List periods that have transactions, newest first
    List,

    /// Select the period to view
    Set {
        /// YYYY-MM, current, prev or next
        period: String,
    },
}

/// Handle a period command
pub fn handle_period_command(
    storage: &Storage,
    settings: &Settings,
    state: &mut AppState,
    cmd: PeriodCommands,
) -> LedgerResult<()> {
    let current = Period::current();

    match cmd {
        PeriodCommands::List => {
            let transactions = storage.transactions.get_all()?;
            let selected = state.period(current);

            for period in available_periods(&transactions, current) {
                let marker = if period == selected { "*" } else { " " };
                println!(
                    "{} {}  {}",
                    marker,
                    period,
                    settings.locale.period_title(period)
                );
            }
        }

        PeriodCommands::Set { period } => {
            let period = resolve_period(&period, state.period(current), current)?;
            state.set_period(period);
            println!("Viewing {}", settings.locale.period_title(period));
        }
    }

    Ok(())
}
