//! CLI commands for reports
//!
//! The monthly summary, the income/expense trend and the per-category
//! spending breakdown.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, PeriodWindow, TrendWindow};
use crate::reports::{CategoryBreakdown, PeriodSummary, TrendReport};
use crate::services::resolve_period;
use crate::state::AppState;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses and balance for one period
    Summary {
        /// Period (defaults to the selected one)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Income and expenses over the last 3, 6 or 12 months
    Trend {
        /// Window length; remembered for later reports
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Spending per category
    #[command(alias = "breakdown")]
    Categories {
        /// Window length ending this month; remembered for later reports
        #[arg(short, long, conflicts_with = "period")]
        months: Option<u32>,

        /// A single period instead of a window
        #[arg(short, long)]
        period: Option<String>,

        /// Only include these categories; remembered for later reports
        #[arg(long, value_delimiter = ',', conflicts_with = "all")]
        only: Vec<String>,

        /// Include every category again
        #[arg(long)]
        all: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    state: &mut AppState,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let current = Period::current();

    match cmd {
        ReportCommands::Summary { period } => {
            let period = match period {
                Some(p) => resolve_period(&p, state.period(current), current)?,
                None => state.period(current),
            };

            let report = PeriodSummary::generate(storage, period)?;
            print!("{}", report.format_terminal(settings));
        }

        ReportCommands::Trend { months } => {
            if let Some(months) = months {
                state.trend_window = Some(parse_window(months)?);
            }
            let window = state
                .trend_window(settings.default_trend_months)
                .ending_at(current);

            let report = TrendReport::generate(storage, window, settings.locale)?;
            print!("{}", report.format_terminal(settings));
        }

        ReportCommands::Categories {
            months,
            period,
            only,
            all,
        } => {
            if all {
                state.set_category_filter(Vec::new());
            } else if !only.is_empty() {
                state.set_category_filter(only);
            }

            let window = match (months, period) {
                (_, Some(p)) => {
                    PeriodWindow::single(resolve_period(&p, state.period(current), current)?)
                }
                (Some(months), None) => {
                    let window = parse_window(months)?;
                    state.trend_window = Some(window);
                    window.ending_at(current)
                }
                (None, None) => state
                    .trend_window(settings.default_trend_months)
                    .ending_at(current),
            };

            let report = CategoryBreakdown::generate(storage, window, &state.category_filter)?;
            print!("{}", report.format_terminal(settings));

            if !state.category_filter.is_empty() {
                println!("Showing only: {}", state.category_filter.join(", "));
            }
        }
    }

    Ok(())
}

fn parse_window(months: u32) -> LedgerResult<TrendWindow> {
    TrendWindow::try_from(months).map_err(|e| LedgerError::Validation(e.to_string()))
}
