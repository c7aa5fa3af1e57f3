//! Monthly Ledger - personal finance tracking by month
//!
//! This library provides the core of a monthly expense ledger: expenses are
//! recorded with a title, amount, category and date, each month carries one
//! income figure, and reports summarize a month, a trend across several
//! months and the share of spending per category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `locale`: Month names and money formatting
//! - `models`: Core data models (transactions, income, categories, periods)
//! - `storage`: JSON file storage layer
//! - `services`: Period filtering, sorting and the mutation entry points
//! - `reports`: Monthly summary, trend and category breakdown
//! - `state`: What the user is viewing and has selected
//! - `audit`: Audit logging system
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use monthly_ledger::config::paths::LedgerPaths;
//! use monthly_ledger::models::Period;
//! use monthly_ledger::reports::PeriodSummary;
//! use monthly_ledger::storage::Storage;
//!
//! let mut storage = Storage::new(LedgerPaths::new()?)?;
//! storage.load_all()?;
//! let summary = PeriodSummary::generate(&storage, Period::current())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod locale;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;

pub use error::LedgerError;
