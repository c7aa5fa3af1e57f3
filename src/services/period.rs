//! Period filtering and period selection
//!
//! Buckets transactions into calendar months and derives the list of periods
//! a user can pick from.

use std::collections::BTreeSet;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, Transaction};

/// Transactions whose date falls in `period`, in their original order
///
/// Transactions with a missing or unreadable date belong to no period and are
/// never returned.
pub fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.period() == Some(period))
        .cloned()
        .collect()
}

/// Periods available for selection, most recent first
///
/// Always contains `current`, plus every period holding at least one
/// transaction.
pub fn available_periods(transactions: &[Transaction], current: Period) -> Vec<Period> {
    let mut periods: BTreeSet<Period> = transactions.iter().filter_map(|t| t.period()).collect();
    periods.insert(current);
    periods.into_iter().rev().collect()
}

/// Transactions that cannot be placed in any period
pub fn undated_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.has_invalid_date())
        .cloned()
        .collect()
}

/// Resolve a user-supplied period relative to `reference`
///
/// Accepts `YYYY-MM`, `current`, `prev`/`last` and `next`.
pub fn resolve_period(input: &str, reference: Period, current: Period) -> LedgerResult<Period> {
    match input.trim().to_lowercase().as_str() {
        "current" | "atual" => Ok(current),
        "prev" | "last" | "anterior" => Ok(reference.prev()),
        "next" | "proximo" | "próximo" => Ok(reference.next()),
        other => Period::parse(other).map_err(|e| LedgerError::Validation(e.to_string())),
    }
}
