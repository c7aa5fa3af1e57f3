//! Income record model
//!
//! A single aggregate income figure attached to one period. At most one
//! record exists per period; the repository is keyed by period so saving a
//! second record for the same period replaces the first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::period::Period;
use super::transaction::MAX_DESCRIPTION_LEN;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
    AmountTooLarge,
    DescriptionTooLong(usize),
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
            Self::AmountTooLarge => write!(f, "Income cannot exceed {}", Money::MAX_INPUT),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description must be at most {} characters (got {})",
                MAX_DESCRIPTION_LEN, len
            ),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Income received in a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: IncomeId,
    pub period: Period,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(period: Period, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeId::new(),
            period,
            amount,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.amount.exceeds_input_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(IncomeValidationError::DescriptionTooLong(len));
        }
        Ok(())
    }
}
