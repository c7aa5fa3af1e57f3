//! User settings for the ledger
//!
//! Display preferences: currency symbol, locale, date format and the default
//! length of the trend window.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::locale::Locale;
use crate::models::TrendWindow;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Month names and decimal separator
    #[serde(default)]
    pub locale: Locale,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Trend window used when a report does not name one
    #[serde(default)]
    pub default_trend_months: TrendWindow,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Reject strftime patterns chrono cannot render
pub fn check_date_format(format: &str) -> Result<(), LedgerError> {
    if format.trim().is_empty() {
        return Err(LedgerError::Config("Date format cannot be empty".into()));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LedgerError::Config(format!(
            "Invalid date format: {}",
            format
        )));
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            locale: Locale::default(),
            date_format: default_date_format(),
            default_trend_months: TrendWindow::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Set the date format after checking that chrono can render it
    pub fn set_date_format(&mut self, format: &str) -> Result<(), LedgerError> {
        check_date_format(format)?;
        self.date_format = format.to_string();
        Ok(())
    }

    /// The date format to render with; a hand-edited invalid pattern falls
    /// back to the default
    pub fn display_date_format(&self) -> &str {
        if check_date_format(&self.date_format).is_ok() {
            &self.date_format
        } else {
            DEFAULT_DATE_FORMAT
        }
    }

    /// Format an amount using the configured symbol and locale
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        self.locale.format_money(amount, &self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.locale, Locale::PtBr);
        assert_eq!(settings.default_trend_months, TrendWindow::SixMonths);
        assert_eq!(settings.format_money(Money::from_cents(12540)), "R$ 125,40");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Locale::En;
        settings.currency_symbol = "$".into();
        settings.default_trend_months = TrendWindow::TwelveMonths;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_trend_months, TrendWindow::TwelveMonths);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale": "en"}"#).unwrap();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.default_trend_months.months(), 6);
    }

    #[test]
    fn test_set_date_format() {
        let mut settings = Settings::default();
        settings.set_date_format("%Y/%m/%d").unwrap();
        assert_eq!(settings.date_format, "%Y/%m/%d");

        assert!(settings.set_date_format("%Q").is_err());
        assert!(settings.set_date_format("").is_err());
        assert_eq!(settings.date_format, "%Y/%m/%d");
    }

    #[test]
    fn test_invalid_stored_date_format_falls_back() {
        let settings: Settings = serde_json::from_str(r#"{"date_format": "%Q"}"#).unwrap();
        assert_eq!(settings.display_date_format(), "%d/%m/%Y");
    }

    #[test]
    fn test_invalid_trend_window_rejected() {
        let result: Result<Settings, _> =
            serde_json::from_str(r#"{"default_trend_months": 5}"#);
        assert!(result.is_err());
    }
}
