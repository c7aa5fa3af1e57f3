//! Display formatting for terminal output
//!
//! Tables for transactions and categories, and the small text helpers the
//! reports use for bars and percentages.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use transaction::{
    format_sort_state, format_transaction_details, format_transaction_table,
};
