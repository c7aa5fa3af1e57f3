//! Trend report
//!
//! Expense, income and balance for each period of a rolling window, oldest
//! period first.

use crate::config::Settings;
use crate::display::report::{format_bar, separator};
use crate::error::LedgerResult;
use crate::locale::Locale;
use crate::models::{IncomeRecord, Money, PeriodWindow, Period, Transaction};
use crate::storage::Storage;

use super::period_summary::PeriodSummary;

/// Width of the expense bar in terminal output
const BAR_WIDTH: usize = 20;

/// Totals for one period of the trend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub period: Period,
    /// Capitalized short month name, e.g. "Fev"
    pub label: String,
    pub expense: Money,
    pub income: Money,
    pub balance: Money,
}

/// Per-period totals across a window
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub window: PeriodWindow,
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Compute the trend from in-memory data
    pub fn from_data(
        transactions: &[Transaction],
        income: &[IncomeRecord],
        window: PeriodWindow,
        locale: Locale,
    ) -> Self {
        let points = window
            .periods()
            .into_iter()
            .map(|period| {
                let summary = PeriodSummary::from_data(transactions, income, period);
                TrendPoint {
                    period,
                    label: locale.short_month_label(period.month()),
                    expense: summary.expense_total,
                    income: summary.income_total,
                    balance: summary.balance,
                }
            })
            .collect();

        Self { window, points }
    }

    /// Compute the trend from stored data
    pub fn generate(storage: &Storage, window: PeriodWindow, locale: Locale) -> LedgerResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let income = storage.income.get_all()?;
        Ok(Self::from_data(&transactions, &income, window, locale))
    }

    pub fn total_expense(&self) -> Money {
        self.points.iter().map(|p| p.expense).sum()
    }

    pub fn total_income(&self) -> Money {
        self.points.iter().map(|p| p.income).sum()
    }

    /// Format the trend as a table with expense bars
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();
        let locale = settings.locale;

        output.push_str(&format!(
            "Trend: {} - {} ({} months)\n",
            locale.period_title(self.window.start()),
            locale.period_title(self.window.end()),
            self.window.len()
        ));
        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<9} {:>14} {:>14} {:>14}  {}\n",
            "Month", "Income", "Expenses", "Balance", ""
        ));

        let max_expense = self
            .points
            .iter()
            .map(|p| p.expense.as_f64())
            .fold(0.0, f64::max);

        for point in &self.points {
            output.push_str(&format!(
                "{:<9} {:>14} {:>14} {:>14}  {}\n",
                format!("{}/{:02}", point.label, point.period.year() % 100),
                settings.format_money(point.income),
                settings.format_money(point.expense),
                settings.format_money(point.balance),
                format_bar(point.expense.as_f64(), max_expense, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<9} {:>14} {:>14} {:>14}\n",
            "Total",
            settings.format_money(self.total_income()),
            settings.format_money(self.total_expense()),
            settings.format_money(self.total_income() - self.total_expense())
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionFields, TrendWindow};

    fn txn(cents: i64, date: &str) -> Transaction {
        Transaction::new(TransactionFields {
            title: "Gasto".into(),
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
    fn test_window_rolls_over_year_boundary() {
        let window = TrendWindow::ThreeMonths.ending_at(period("2025-02"));
        let report = TrendReport::from_data(&[], &[], window, Locale::PtBr);

        let periods: Vec<_> = report.points.iter().map(|p| p.period).collect();
        assert_eq!(
            periods,
            vec![period("2024-12"), period("2025-01"), period("2025-02")]
        );

        let labels: Vec<_> = report.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Dez", "Jan", "Fev"]);
    }

    #[test]
    fn test_points_per_period() {
        let transactions = vec![
            txn(10000, "2025-01-10"),
            txn(5000, "2025-01-20"),
            txn(3000, "2025-02-01"),
            txn(9999, "2024-06-01"),
        ];
        let income = vec![IncomeRecord::new(period("2025-01"), Money::from_cents(50000))];
        let window = TrendWindow::ThreeMonths.ending_at(period("2025-02"));

        let report = TrendReport::from_data(&transactions, &income, window, Locale::PtBr);

        assert_eq!(report.points[0].expense, Money::zero());
        assert_eq!(report.points[1].expense, Money::from_cents(15000));
        assert_eq!(report.points[1].income, Money::from_cents(50000));
        assert_eq!(report.points[1].balance, Money::from_cents(35000));
        assert_eq!(report.points[2].expense, Money::from_cents(3000));
        assert_eq!(report.points[2].balance, Money::from_cents(-3000));

        for point in &report.points {
            assert_eq!(point.balance, point.income - point.expense);
        }
        assert_eq!(report.total_expense(), Money::from_cents(18000));
    }

    #[test]
    fn test_window_lengths() {
        for (window, expected) in [
            (TrendWindow::ThreeMonths, 3),
            (TrendWindow::SixMonths, 6),
            (TrendWindow::TwelveMonths, 12),
        ] {
            let report = TrendReport::from_data(
                &[],
                &[],
                window.ending_at(period("2025-06")),
                Locale::En,
            );
            assert_eq!(report.points.len(), expected);
            assert_eq!(report.points.last().unwrap().period, period("2025-06"));
        }
    }

    #[test]
    fn test_twelve_month_window_spans_a_year() {
        let report = TrendReport::from_data(
            &[],
            &[],
            TrendWindow::TwelveMonths.ending_at(period("2025-12")),
            Locale::En,
        );
        assert_eq!(report.points[0].period, period("2025-01"));
        assert_eq!(report.points[0].label, "Jan");
        assert_eq!(report.points[11].label, "Dec");
    }

    #[test]
    fn test_format_terminal() {
        let transactions = vec![txn(10000, "2025-01-10")];
        let window = TrendWindow::ThreeMonths.ending_at(period("2025-01"));
        let report = TrendReport::from_data(&transactions, &[], window, Locale::PtBr);

        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("Novembro 2024 - Janeiro 2025"));
        assert!(output.contains("Jan/25"));
        assert!(output.contains("-R$ 100,00"));
    }
}
