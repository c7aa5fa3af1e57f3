//! Transaction (expense) model
//!
//! A transaction is a single dated, categorized expense. The date is kept in
//! the form it was stored in; `calendar_date` interprets it as a local
//! calendar date so that bucketing never shifts across a day boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::period::Period;

/// Maximum title length, in characters
pub const MAX_TITLE_LEN: usize = 20;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Format used to store transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Interpret a stored date string as a calendar date
///
/// Only the `YYYY-MM-DD` part is read; anything after a `T` or a space
/// (a time of day, a zone suffix) is ignored.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    MissingTitle,
    TitleTooLong(usize),
    NegativeAmount,
    AmountTooLarge,
    MissingCategory,
    MissingDate,
    InvalidDate(String),
    DescriptionTooLong(usize),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::TitleTooLong(len) => write!(
                f,
                "Title must be at most {} characters (got {})",
                MAX_TITLE_LEN, len
            ),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", Money::MAX_INPUT),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidDate(raw) => write!(f, "Invalid date (expected YYYY-MM-DD): {}", raw),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description must be at most {} characters (got {})",
                MAX_DESCRIPTION_LEN, len
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// The user-editable fields of a transaction
///
/// Used both for creating a transaction and for replacing every field of an
/// existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFields {
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl TransactionFields {
    /// Fields with trimmed text, as they will be stored
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            amount: self.amount,
            category: self.category.trim().to_string(),
            date: self.date.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Check required fields and length limits
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        let title_len = self.title.chars().count();
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::MissingTitle);
        }
        if title_len > MAX_TITLE_LEN {
            return Err(TransactionValidationError::TitleTooLong(title_len));
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        if self.amount.exceeds_input_limit() {
            return Err(TransactionValidationError::AmountTooLarge);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        if self.date.trim().is_empty() {
            return Err(TransactionValidationError::MissingDate);
        }
        if parse_calendar_date(&self.date).is_none() {
            return Err(TransactionValidationError::InvalidDate(self.date.clone()));
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(TransactionValidationError::DescriptionTooLong(description_len));
        }

        Ok(())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned on creation
    pub id: TransactionId,

    /// Short title shown in the table
    pub title: String,

    /// Non-negative amount
    pub amount: Money,

    /// Category name; may no longer exist in the category set
    #[serde(default)]
    pub category: String,

    /// Calendar date as stored (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction from its fields
    pub fn new(fields: TransactionFields) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: fields.title,
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with the common fields and no description
    pub fn with_details(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionFields {
            title: title.into(),
            amount,
            category: category.into(),
            date: date.format(DATE_FORMAT).to_string(),
            description: String::new(),
        })
    }

    /// Replace every editable field, keeping the identifier
    pub fn apply(&mut self, fields: TransactionFields) {
        self.title = fields.title;
        self.amount = fields.amount;
        self.category = fields.category;
        self.date = fields.date;
        self.description = fields.description;
        self.updated_at = Utc::now();
    }

    /// The current editable fields
    pub fn fields(&self) -> TransactionFields {
        TransactionFields {
            title: self.title.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date.clone(),
            description: self.description.clone(),
        }
    }

    /// The stored date as a calendar date, if it can be read
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// The period this transaction falls into, if its date can be read
    pub fn period(&self) -> Option<Period> {
        self.calendar_date().map(Period::from_date)
    }

    /// Whether the stored date cannot be bucketed into any period
    pub fn has_invalid_date(&self) -> bool {
        self.calendar_date().is_none()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        self.fields().validate()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.title, self.amount)
    }
}
