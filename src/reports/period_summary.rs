//! Period summary
//!
//! Expense total, income and balance for a single period.

use crate::config::Settings;
use crate::display::report::separator;
use crate::error::LedgerResult;
use crate::models::{IncomeRecord, Money, Period, Transaction};
use crate::services::filter_by_period;
use crate::storage::Storage;

/// Totals for one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub period: Period,
    /// Sum of the period's transaction amounts
    pub expense_total: Money,
    /// The period's income record amount, zero if none was saved
    pub income_total: Money,
    /// `income_total - expense_total`
    pub balance: Money,
    pub transaction_count: usize,
}

impl PeriodSummary {
    /// Compute the summary from in-memory data
    pub fn from_data(
        transactions: &[Transaction],
        income: &[IncomeRecord],
        period: Period,
    ) -> Self {
        let in_period = filter_by_period(transactions, period);
        let expense_total: Money = in_period.iter().map(|t| t.amount).sum();
        let income_total = income_for_period(income, period);

        Self {
            period,
            expense_total,
            income_total,
            balance: income_total - expense_total,
            transaction_count: in_period.len(),
        }
    }

    /// Compute the summary from stored data
    pub fn generate(storage: &Storage, period: Period) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let income = storage.income.get_all()?;
        Ok(Self::from_data(&transactions, &income, period))
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", settings.locale.period_title(self.period)));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>22}\n",
            "Income",
            settings.format_money(self.income_total)
        ));
        output.push_str(&format!(
            "{:<16} {:>22}\n",
            "Expenses",
            settings.format_money(self.expense_total)
        ));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>22}\n",
            "Balance",
            settings.format_money(self.balance)
        ));
        output.push_str(&format!("{} transaction(s)\n", self.transaction_count));

        output
    }
}

/// Income saved for `period`, zero when there is no record
pub fn income_for_period(income: &[IncomeRecord], period: Period) -> Money {
    income
        .iter()
        .find(|r| r.period == period)
        .map(|r| r.amount)
        .unwrap_or_default()
}
