//! Core data models for the ledger
//!
//! This module contains the data structures that represent the domain:
//! expenses, per-period income, categories, periods and money.

pub mod category;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, CategoryValidationError, DEFAULT_CATEGORIES};
pub use ids::{CategoryId, IncomeId, TransactionId};
pub use income::{IncomeRecord, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError, PeriodWindow, TrendWindow};
pub use transaction::{Transaction, TransactionFields, TransactionValidationError};
