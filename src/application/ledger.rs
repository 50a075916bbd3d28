use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    parse_money, savings_progress_pct, total_amount, ExpenseEntry, IncomeEntry, ParseMoneyError,
    Summary, DEFAULT_CURRENCY,
};

use super::{AmountField, LedgerError};

/// In-memory ledger for one session.
/// This is the primary interface for any front end (shell, GUI, etc.).
///
/// Every mutating operation takes raw text input, validates it completely
/// before touching any state, and returns the updated summary.
#[derive(Debug, Clone)]
pub struct Ledger {
    currency: String,
    income: Vec<IncomeEntry>,
    expenses: Vec<ExpenseEntry>,
    savings_goal: Decimal,
    savings_balance: Decimal,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that formats amounts with `currency`.
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            income: Vec::new(),
            expenses: Vec::new(),
            savings_goal: Decimal::ZERO,
            savings_balance: Decimal::ZERO,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Record an income entry.
    pub fn add_income(&mut self, source: &str, amount_text: &str) -> Result<Summary, LedgerError> {
        let amount = parse_amount(amount_text, AmountField::Amount)?;
        checked_total(total_amount(&self.income), amount, AmountField::Amount)?;

        self.income.push(IncomeEntry::new(source, amount));
        debug!(source, %amount, entries = self.income.len(), "income recorded");
        Ok(self.compute_summary())
    }

    /// Record an expense entry.
    pub fn add_expense(
        &mut self,
        category: &str,
        amount_text: &str,
    ) -> Result<Summary, LedgerError> {
        let amount = parse_amount(amount_text, AmountField::Amount)?;
        checked_total(total_amount(&self.expenses), amount, AmountField::Amount)?;

        self.expenses.push(ExpenseEntry::new(category, amount));
        debug!(category, %amount, entries = self.expenses.len(), "expense recorded");
        Ok(self.compute_summary())
    }

    /// Replace the savings goal. The last value set wins.
    pub fn set_savings_goal(&mut self, goal_text: &str) -> Result<Summary, LedgerError> {
        let goal = parse_amount(goal_text, AmountField::SavingsGoal)?;

        self.savings_goal = goal;
        debug!(%goal, "savings goal set");
        Ok(self.compute_summary())
    }

    /// Add to the savings balance. Amounts accumulate; there is no withdrawal.
    pub fn add_to_savings(&mut self, amount_text: &str) -> Result<Summary, LedgerError> {
        let amount = parse_amount(amount_text, AmountField::Amount)?;
        let balance = checked_total(self.savings_balance, amount, AmountField::Amount)?;

        self.savings_balance = balance;
        debug!(%amount, %balance, "savings added");
        Ok(self.compute_summary())
    }

    // ========================
    // Queries
    // ========================

    /// Derive the current summary. Never fails and never mutates.
    pub fn compute_summary(&self) -> Summary {
        Summary {
            currency: self.currency.clone(),
            total_income: total_amount(&self.income),
            total_expenses: total_amount(&self.expenses),
            savings_goal: self.savings_goal,
            savings_balance: self.savings_balance,
            savings_progress_pct: savings_progress_pct(self.savings_balance, self.savings_goal),
        }
    }

    pub fn income(&self) -> &[IncomeEntry] {
        &self.income
    }

    pub fn expenses(&self) -> &[ExpenseEntry] {
        &self.expenses
    }

    pub fn savings_goal(&self) -> Decimal {
        self.savings_goal
    }

    pub fn savings_balance(&self) -> Decimal {
        self.savings_balance
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Empty text is a missing amount; anything else must parse as a number.
fn parse_amount(text: &str, field: AmountField) -> Result<Decimal, LedgerError> {
    if text.is_empty() {
        return Err(LedgerError::MissingAmount { field });
    }
    parse_money(text).map_err(|reason| LedgerError::InvalidAmount { field, reason })
}

fn checked_total(
    total: Decimal,
    amount: Decimal,
    field: AmountField,
) -> Result<Decimal, LedgerError> {
    total
        .checked_add(amount)
        .ok_or(LedgerError::InvalidAmount {
            field,
            reason: ParseMoneyError::Overflow,
        })
}
