//! Application state
//!
//! What the user is currently looking at: the selected period, the sort
//! applied to the transaction table, the dashboard trend window and category
//! filter, and which rows are selected. The state is plain data; the command
//! layer loads it, passes it through the core functions and saves it back.

use serde::{Deserialize, Serialize};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, Transaction, TransactionId, TrendWindow};
use crate::services::{filter_by_period, sort_transactions, SortField, SortState};
use crate::storage::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Selected period; `None` follows the current month
    #[serde(default)]
    pub selected_period: Option<Period>,

    #[serde(default)]
    pub sort: SortState,

    /// Trend window; `None` uses the configured default
    #[serde(default)]
    pub trend_window: Option<TrendWindow>,

    /// Categories shown in the breakdown; empty shows all
    #[serde(default)]
    pub category_filter: Vec<String>,

    /// Selected transactions, in selection order
    #[serde(default)]
    pub selected: Vec<TransactionId>,
}

impl AppState {
    /// Load the saved state, or the default state if none was saved
    pub fn load(paths: &LedgerPaths) -> LedgerResult<Self> {
        read_json(paths.state_file())
    }

    /// Save the state
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        write_json_atomic(paths.state_file(), self)
    }

    /// The period being viewed
    pub fn period(&self, current: Period) -> Period {
        self.selected_period.unwrap_or(current)
    }

    /// Switch to another period; the selection belongs to the old view and
    /// is cleared
    pub fn set_period(&mut self, period: Period) {
        if self.selected_period != Some(period) {
            self.selected.clear();
        }
        self.selected_period = Some(period);
    }

    pub fn trend_window(&self, default: TrendWindow) -> TrendWindow {
        self.trend_window.unwrap_or(default)
    }

    /// Advance the sort for `field` and return the new state
    pub fn toggle_sort(&mut self, field: SortField) -> SortState {
        self.sort = self.sort.toggle(field);
        self.sort
    }

    /// The transaction table: the selected period's transactions, sorted
    pub fn view(&self, transactions: &[Transaction], current: Period) -> Vec<Transaction> {
        let in_period = filter_by_period(transactions, self.period(current));
        sort_transactions(&in_period, &self.sort)
    }

    pub fn is_selected(&self, id: TransactionId) -> bool {
        self.selected.contains(&id)
    }

    pub fn select(&mut self, id: TransactionId) {
        if !self.is_selected(id) {
            self.selected.push(id);
        }
    }

    pub fn deselect(&mut self, id: TransactionId) {
        self.selected.retain(|s| *s != id);
    }

    /// Select every row of `view`, replacing the previous selection
    pub fn select_all(&mut self, view: &[Transaction]) {
        self.selected = view.iter().map(|t| t.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drop selected IDs that no longer exist
    pub fn retain_existing(&mut self, transactions: &[Transaction]) {
        self.selected
            .retain(|id| transactions.iter().any(|t| t.id == *id));
    }

    /// The transaction to edit; editing needs exactly one selected row
    pub fn edit_target(&self) -> LedgerResult<TransactionId> {
        match self.selected.as_slice() {
            [id] => Ok(*id),
            [] => Err(LedgerError::Validation(
                "Select a transaction to edit".into(),
            )),
            many => Err(LedgerError::Validation(format!(
                "Select exactly one transaction to edit ({} selected)",
                many.len()
            ))),
        }
    }

    /// Restrict the breakdown to `categories`; an empty list shows all
    pub fn set_category_filter(&mut self, categories: Vec<String>) {
        let mut filter: Vec<String> = Vec::new();
        for name in categories {
            let name = name.trim().to_string();
            if !name.is_empty() && !filter.contains(&name) {
                filter.push(name);
            }
        }
        self.category_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionFields};
    use crate::services::SortDirection;
    use tempfile::TempDir;

    fn txn(title: &str, cents: i64, date: &str) -> Transaction {
        Transaction::new(TransactionFields {
            title: title.into(),
            amount: Money::from_cents(cents),
            category: "Outros".into(),
            date: date.into(),
            description: String::new(),
        })
    }

    fn period(s: &str) -> Period {
        Period::parse(s).unwrap()
    }

    #[test]
    fn test_period_defaults_to_current() {
        let mut state = AppState::default();
        assert_eq!(state.period(period("2025-06")), period("2025-06"));

        state.set_period(period("2025-01"));
        assert_eq!(state.period(period("2025-06")), period("2025-01"));
    }

    #[test]
    fn test_view_filters_and_sorts() {
        let transactions = vec![
            txn("B", 300, "2025-01-02"),
            txn("A", 100, "2025-01-01"),
            txn("Fora", 50, "2025-02-01"),
        ];
        let mut state = AppState::default();
        state.set_period(period("2025-01"));

        let view = state.view(&transactions, period("2025-06"));
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].title, "B");

        state.toggle_sort(SortField::Amount);
        let view = state.view(&transactions, period("2025-06"));
        assert_eq!(view[0].title, "A");

        assert_eq!(
            state.toggle_sort(SortField::Amount),
            SortState::by(SortField::Amount, SortDirection::Descending)
        );
        assert!(state.toggle_sort(SortField::Amount).is_unsorted());
    }

    #[test]
    fn test_selection() {
        let transactions = vec![txn("A", 1, "2025-01-01"), txn("B", 2, "2025-01-02")];
        let mut state = AppState::default();

        state.select(transactions[0].id);
        state.select(transactions[0].id);
        assert_eq!(state.selected.len(), 1);
        assert_eq!(state.edit_target().unwrap(), transactions[0].id);

        state.select_all(&transactions);
        assert_eq!(state.selected.len(), 2);
        assert!(state.edit_target().unwrap_err().is_validation());

        state.deselect(transactions[1].id);
        assert!(!state.is_selected(transactions[1].id));

        state.clear_selection();
        assert!(state.edit_target().unwrap_err().is_validation());
    }

    #[test]
    fn test_changing_period_clears_selection() {
        let transactions = vec![txn("A", 1, "2025-01-01")];
        let mut state = AppState::default();
        state.set_period(period("2025-01"));
        state.select(transactions[0].id);

        state.set_period(period("2025-01"));
        assert_eq!(state.selected.len(), 1);

        state.set_period(period("2025-02"));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_retain_existing() {
        let transactions = vec![txn("A", 1, "2025-01-01")];
        let mut state = AppState::default();
        state.select(transactions[0].id);
        state.select(TransactionId::new());

        state.retain_existing(&transactions);
        assert_eq!(state.selected, vec![transactions[0].id]);
    }

    #[test]
    fn test_category_filter_dedupes() {
        let mut state = AppState::default();
        state.set_category_filter(vec![
            " Moradia ".into(),
            "Moradia".into(),
            "".into(),
            "Saúde".into(),
        ]);
        assert_eq!(state.category_filter, vec!["Moradia", "Saúde"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(AppState::load(&paths).unwrap(), AppState::default());

        let mut state = AppState::default();
        state.set_period(period("2024-12"));
        state.toggle_sort(SortField::Date);
        state.trend_window = Some(TrendWindow::TwelveMonths);
        state.save(&paths).unwrap();

        assert_eq!(AppState::load(&paths).unwrap(), state);
    }
}
