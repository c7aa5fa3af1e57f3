//! Month names and money formatting per locale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Money, Period};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Display language for month names and number formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Self::PtBr => &MONTHS_PT_BR,
            Self::En => &MONTHS_EN,
        }
    }

    /// Full lowercase month name for a 1-based month
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        self.month_names()[index]
    }

    /// Capitalized three-letter month label, e.g. "Fev"
    pub fn short_month_label(&self, month: u32) -> String {
        capitalize(&self.month_name(month).chars().take(3).collect::<String>())
    }

    /// Capitalized long title for a period, e.g. "Dezembro 2025"
    pub fn period_title(&self, period: Period) -> String {
        format!("{} {}", capitalize(self.month_name(period.month())), period.year())
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::PtBr => ',',
            Self::En => '.',
        }
    }

    /// Format an amount with the given currency symbol
    pub fn format_money(&self, amount: Money, symbol: &str) -> String {
        amount.format_with(symbol, self.decimal_separator())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Self::PtBr),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_month_labels() {
        assert_eq!(Locale::PtBr.short_month_label(2), "Fev");
        assert_eq!(Locale::PtBr.short_month_label(3), "Mar");
        assert_eq!(Locale::En.short_month_label(5), "May");
    }

    #[test]
    fn test_period_title() {
        let period = Period::new(2025, 12).unwrap();
        assert_eq!(Locale::PtBr.period_title(period), "Dezembro 2025");
        assert_eq!(Locale::En.period_title(period), "December 2025");
    }

    #[test]
    fn test_format_money() {
        let amount = Money::from_cents(35080);
        assert_eq!(Locale::PtBr.format_money(amount, "R$"), "R$ 350,80");
        assert_eq!(Locale::En.format_money(amount, "$"), "$ 350.80");
    }

    #[test]
    fn test_parse_and_serialize() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("março"), "Março");
        assert_eq!(capitalize(""), "");
    }
}
