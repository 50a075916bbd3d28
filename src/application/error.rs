use std::fmt;

use thiserror::Error;

use crate::domain::ParseMoneyError;

/// The input field an amount was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    Amount,
    SavingsGoal,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Amount => write!(f, "Amount"),
            AmountField::SavingsGoal => write!(f, "Savings Goal"),
        }
    }
}

/// Rejected input. Both kinds are recoverable and leave the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{field} is required")]
    MissingAmount { field: AmountField },

    #[error("Invalid {field}")]
    InvalidAmount {
        field: AmountField,
        #[source]
        reason: ParseMoneyError,
    },
}
