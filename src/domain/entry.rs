use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub type EntryId = Uuid;

/// Money received from a source. Entries are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeEntry {
    pub id: EntryId,
    /// Free-form label, may be empty
    pub source: String,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl IncomeEntry {
    pub fn new(source: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }
}

/// Money spent on a category. Entries are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseEntry {
    pub id: EntryId,
    /// Free-form label, may be empty
    pub category: String,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseEntry {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }
}

/// Anything carrying an amount that contributes to a total.
pub trait Amount {
    fn amount(&self) -> Decimal;
}

impl Amount for IncomeEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Amount for ExpenseEntry {
    fn amount(&self) -> Decimal {
        self.amount
    }
}
