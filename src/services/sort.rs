//! Transaction sorting
//!
//! Sorting is driven by a [`SortState`] that cycles through
//! unsorted, ascending and descending as the same field is picked again.
//! Picking a different field always starts over at ascending.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Column a transaction list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Amount,
    Category,
    Date,
    Description,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Amount,
        SortField::Category,
        SortField::Date,
        SortField::Description,
    ];

    /// Compare two transactions on this field, ascending
    pub fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortField::Amount => a.amount.cmp(&b.amount),
            // Unreadable dates sort before every real date
            SortField::Date => a.calendar_date().cmp(&b.calendar_date()),
            SortField::Title => collate(&a.title, &b.title),
            SortField::Category => collate(&a.category, &b.category),
            SortField::Description => collate(&a.description, &b.description),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Title => "title",
            SortField::Amount => "amount",
            SortField::Category => "category",
            SortField::Date => "date",
            SortField::Description => "description",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "titulo" | "título" => Ok(SortField::Title),
            "amount" | "valor" => Ok(SortField::Amount),
            "category" | "categoria" => Ok(SortField::Category),
            "date" | "data" => Ok(SortField::Date),
            "description" | "descricao" | "descrição" => Ok(SortField::Description),
            other => Err(format!(
                "Unknown sort field '{}'. Use title, amount, category, date or description",
                other
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// The field and direction currently applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Sort selection for the transaction table
///
/// `None` means unsorted: the list keeps its stored order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    active: Option<ActiveSort>,
}

impl SortState {
    /// Unsorted state
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// State sorting by `field` in `direction`
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            active: Some(ActiveSort { field, direction }),
        }
    }

    pub fn active(&self) -> Option<ActiveSort> {
        self.active
    }

    pub fn field(&self) -> Option<SortField> {
        self.active.map(|a| a.field)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|a| a.direction)
    }

    pub fn is_unsorted(&self) -> bool {
        self.active.is_none()
    }

    /// Advance the state after `field` was picked
    ///
    /// Same field: ascending -> descending -> unsorted -> ascending.
    /// Other field: ascending on the new field.
    pub fn toggle(self, field: SortField) -> Self {
        match self.active {
            Some(ActiveSort {
                field: current,
                direction: SortDirection::Ascending,
            }) if current == field => Self::by(field, SortDirection::Descending),
            Some(ActiveSort {
                field: current,
                direction: SortDirection::Descending,
            }) if current == field => Self::unsorted(),
            _ => Self::by(field, SortDirection::Ascending),
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active {
            Some(active) => write!(f, "{} {}", active.field, active.direction),
            None => write!(f, "unsorted"),
        }
    }
}

/// Return a sorted copy of `transactions`
///
/// The sort is stable: equal elements keep their input order, and an
/// unsorted state returns the input order unchanged.
pub fn sort_transactions(transactions: &[Transaction], state: &SortState) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    if let Some(ActiveSort { field, direction }) = state.active {
        sorted.sort_by(|a, b| {
            let ordering = field.compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

/// Locale-aware text comparison
///
/// Letters compare without regard to case or accents, so `Água` sorts with
/// the other `a` words rather than after `z`. Strings that only differ in
/// case or accents fall back to a plain comparison so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase).map(fold_accent);
    let folded_b = b.chars().flat_map(char::to_lowercase).map(fold_accent);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
