//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod income;
pub mod period;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use period::{handle_period_command, PeriodCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{LedgerError, LedgerResult};

/// Turn a confirmation request into a prompt on stdout
///
/// Returns `Ok(None)` when the operation was held back for confirmation;
/// every other error is passed through.
pub(crate) fn confirm_or_report<T>(result: LedgerResult<T>) -> LedgerResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(LedgerError::ConfirmationRequired(message)) => {
            println!("{}", message);
            println!("Re-run with --force to proceed.");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
