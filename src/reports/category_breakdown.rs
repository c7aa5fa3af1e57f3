//! Category breakdown
//!
//! Expense totals per category over a window of periods, with each
//! category's share of the included total.

use std::collections::HashMap;

use crate::config::Settings;
use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::error::LedgerResult;
use crate::models::{Money, PeriodWindow, Transaction};
use crate::services::sort::collate;
use crate::storage::Storage;

/// Label shown for transactions with an empty category
pub const UNCATEGORIZED_LABEL: &str = "(sem categoria)";

const BAR_WIDTH: usize = 20;

/// One category's total within the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category name as stored on the transactions
    pub category: String,
    pub amount: Money,
    /// Share of the breakdown total, 0 to 100
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Expense totals grouped by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub window: PeriodWindow,
    /// Largest amount first
    pub shares: Vec<CategoryShare>,
    /// Sum over the included categories
    pub total: Money,
}

impl CategoryBreakdown {
    /// Compute the breakdown from in-memory data
    ///
    /// With a non-empty `allow_list` only those categories are included and
    /// percentages are relative to their combined total.
    pub fn from_data(
        transactions: &[Transaction],
        window: PeriodWindow,
        allow_list: &[String],
    ) -> Self {
        let mut totals: HashMap<&str, (Money, usize)> = HashMap::new();

        for txn in transactions {
            let in_window = txn.period().map_or(false, |p| window.contains(p));
            if !in_window {
                continue;
            }
            if !allow_list.is_empty() && !allow_list.iter().any(|c| *c == txn.category) {
                continue;
            }

            let entry = totals.entry(txn.category.as_str()).or_default();
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total: Money = totals.values().map(|(amount, _)| *amount).sum();

        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, (amount, transaction_count))| CategoryShare {
                category: category.to_string(),
                amount,
                percentage: percentage_of(amount, total),
                transaction_count,
            })
            .collect();

        shares.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| collate(&a.category, &b.category))
        });

        Self {
            window,
            shares,
            total,
        }
    }

    /// Compute the breakdown from stored data
    pub fn generate(
        storage: &Storage,
        window: PeriodWindow,
        allow_list: &[String],
    ) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        Ok(Self::from_data(&transactions, window, allow_list))
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        let locale = settings.locale;

        if self.window.len() == 1 {
            output.push_str(&format!(
                "Spending by category: {}\n",
                locale.period_title(self.window.end())
            ));
        } else {
            output.push_str(&format!(
                "Spending by category: {} - {}\n",
                locale.period_title(self.window.start()),
                locale.period_title(self.window.end())
            ));
        }
        output.push_str(&separator(80));
        output.push('\n');

        if self.shares.is_empty() {
            output.push_str("No expenses in this window.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>14} {:>6} {:>7}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));

        for share in &self.shares {
            let name = if share.category.is_empty() {
                UNCATEGORIZED_LABEL
            } else {
                share.category.as_str()
            };
            output.push_str(&format!(
                "{:<22} {:>14} {:>6} {:>7}  {}\n",
                truncate(name, 22),
                settings.format_money(share.amount),
                share.transaction_count,
                format_percentage(share.percentage),
                format_bar(share.percentage, 100.0, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>14}\n",
            "Total",
            settings.format_money(self.total)
        ));

        output
    }
}

/// `amount` as a percentage of `total`; zero when the total is zero
fn percentage_of(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        amount.cents() as f64 / total.cents() as f64 * 100.0
    }
}
