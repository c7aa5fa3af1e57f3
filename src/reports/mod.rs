//! Reports for the ledger
//!
//! Period totals, multi-month trends and category breakdowns. Each report
//! can be computed from in-memory slices (`from_data`) or from storage
//! (`generate`), and renders itself with `format_terminal`.

pub mod category_breakdown;
pub mod period_summary;
pub mod trend;

pub use category_breakdown::{CategoryBreakdown, CategoryShare};
pub use period_summary::{income_for_period, PeriodSummary};
pub use trend::{TrendPoint, TrendReport};
