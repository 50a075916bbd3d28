pub mod application;
pub mod cli;
pub mod domain;

pub use application::{Ledger, LedgerError};
pub use domain::*;
