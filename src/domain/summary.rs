use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{format_amount, format_money, Amount};

/// Sum the amounts of a sequence of entries.
pub fn total_amount<T: Amount>(entries: &[T]) -> Decimal {
    entries.iter().map(Amount::amount).sum()
}

/// Savings progress as a percentage of the goal.
/// A goal of zero or less yields 0 regardless of the balance.
pub fn savings_progress_pct(balance: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    // Saturates when the ratio does not fit
    balance
        .checked_div(goal)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if balance.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Read-only snapshot of the ledger totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub currency: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub savings_goal: Decimal,
    pub savings_balance: Decimal,
    pub savings_progress_pct: Decimal,
}

impl Summary {
    pub fn formatted(&self) -> FormattedSummary {
        FormattedSummary {
            total_income: format_money(&self.currency, self.total_income),
            total_expenses: format_money(&self.currency, self.total_expenses),
            savings_goal: format_money(&self.currency, self.savings_goal),
            savings_balance: format_money(&self.currency, self.savings_balance),
            savings_progress: format!("{}%", format_amount(self.savings_progress_pct)),
        }
    }

    /// Five labelled lines, one per quantity.
    pub fn render(&self) -> String {
        self.formatted().to_string()
    }
}

/// The summary quantities as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSummary {
    pub total_income: String,
    pub total_expenses: String,
    pub savings_goal: String,
    pub savings_balance: String,
    pub savings_progress: String,
}

impl fmt::Display for FormattedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Income: {}", self.total_income)?;
        writeln!(f, "Total Expenses: {}", self.total_expenses)?;
        writeln!(f, "Savings Goal: {}", self.savings_goal)?;
        writeln!(f, "Savings Balance: {}", self.savings_balance)?;
        writeln!(f, "Savings Progress: {}", self.savings_progress)
    }
}
