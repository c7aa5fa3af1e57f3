//! Service layer for the ledger
//!
//! Pure period filtering and sorting, plus the mutation entry points that
//! validate input on top of the storage layer.

pub mod category;
pub mod income;
pub mod period;
pub mod sort;
pub mod transaction;

pub use category::{CategoryService, CategoryUsage};
pub use income::IncomeService;
pub use period::{available_periods, filter_by_period, resolve_period, undated_transactions};
pub use sort::{sort_transactions, SortDirection, SortField, SortState};
pub use transaction::TransactionService;
