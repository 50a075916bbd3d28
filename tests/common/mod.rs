// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::str::FromStr;

use anyhow::Result;
use pitaka::application::{Ledger, Notifier};
use pitaka::cli::{Shell, ShellOptions};
use rust_decimal::Decimal;

/// Shorthand for decimal literals in assertions
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Warning channel that records every message it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    pub warnings: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn warn(&mut self, title: &str, message: &str) {
        self.warnings.push((title.to_string(), message.to_string()));
    }
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|(_, m)| m.as_str()).collect()
    }
}

/// Run a shell script against a fresh peso ledger and return the ledger
/// together with everything the shell printed.
pub fn run_script(script: &str, options: ShellOptions) -> Result<(Ledger, String)> {
    let mut shell = Shell::new(Ledger::new(), options, Vec::new());
    shell.run(script.as_bytes())?;
    let ledger = shell.ledger().clone();
    let output = String::from_utf8(shell.into_output())?;
    Ok((ledger, output))
}

/// Test fixture: the household month used across scenarios
pub struct StandardMonth;

impl StandardMonth {
    /// Salary 1000, rent 400, goal 500, saved 100
    pub fn record(ledger: &mut Ledger) -> Result<()> {
        ledger.add_income("Salary", "1000")?;
        ledger.add_expense("Rent", "400")?;
        ledger.set_savings_goal("500")?;
        ledger.add_to_savings("100")?;
        Ok(())
    }
}
