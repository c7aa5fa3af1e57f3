//! Calendar-month periods
//!
//! A period is the unit of time bucketing for every view and report. It is
//! keyed by `YYYY-MM` with a zero-padded month, so the string form sorts the
//! same way the period does.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, checking that the month is in 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current real-world period in local time
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this calendar month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The period `n` months before this one, rolling over year boundaries
    pub fn months_back(&self, n: u32) -> Self {
        let index = self.month_index() - i64::from(n);
        Self::from_month_index(index)
    }

    /// The period `n` months after this one
    pub fn months_forward(&self, n: u32) -> Self {
        let index = self.month_index() + i64::from(n);
        Self::from_month_index(index)
    }

    pub fn prev(&self) -> Self {
        self.months_back(1)
    }

    pub fn next(&self) -> Self {
        self.months_forward(1)
    }

    /// First day of the month
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn month_index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_month_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Parse a `YYYY-MM` key
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// A run of consecutive periods ending at (and including) `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    end: Period,
    len: u32,
}

impl PeriodWindow {
    /// Window of `len` months ending at `end`; a zero length is widened to one
    pub fn ending_at(end: Period, len: u32) -> Self {
        Self { end, len: len.max(1) }
    }

    /// Window covering a single period
    pub fn single(period: Period) -> Self {
        Self::ending_at(period, 1)
    }

    pub fn start(&self) -> Period {
        self.end.months_back(self.len - 1)
    }

    pub fn end(&self) -> Period {
        self.end
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The periods in the window, oldest first
    pub fn periods(&self) -> Vec<Period> {
        (0..self.len).rev().map(|n| self.end.months_back(n)).collect()
    }

    pub fn contains(&self, period: Period) -> bool {
        period >= self.start() && period <= self.end
    }
}

/// Length of the dashboard trend window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TrendWindow {
    ThreeMonths,
    #[default]
    SixMonths,
    TwelveMonths,
}

impl TrendWindow {
    pub fn months(&self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    /// The window of this length ending at `current`
    pub fn ending_at(&self, current: Period) -> PeriodWindow {
        PeriodWindow::ending_at(current, self.months())
    }
}

impl TryFrom<u32> for TrendWindow {
    type Error = PeriodParseError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(Self::ThreeMonths),
            6 => Ok(Self::SixMonths),
            12 => Ok(Self::TwelveMonths),
            other => Err(PeriodParseError::InvalidWindow(other)),
        }
    }
}

impl From<TrendWindow> for u32 {
    fn from(window: TrendWindow) -> Self {
        window.months()
    }
}

impl fmt::Display for TrendWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidWindow(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format (expected YYYY-MM): {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            Self::InvalidWindow(n) => write!(f, "Trend window must be 3, 6 or 12 months, got {}", n),
        }
    }
}

impl std::error::Error for PeriodParseError {}
