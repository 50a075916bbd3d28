use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::application::{report, Ledger, LedgerError, Notifier};
use crate::domain::{format_money, Summary};

const HELP: &str = "\
Commands:
  income <amount> [source]      Add income
  expense <amount> [category]   Add an expense
  goal <amount>                 Set the savings goal
  save <amount>                 Add to savings
  summary                       Show or hide the live summary
  show                          Print the summary once
  entries                       List recorded income and expenses
  help                          Show this help
  quit                          End the session";

/// A single line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Income { amount: String, source: String },
    Expense { amount: String, category: String },
    Goal { amount: String },
    Save { amount: String },
    ToggleSummary,
    Show,
    Entries,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Returns `Ok(None)` for blank lines and `Err` with the
    /// offending word for unknown commands.
    ///
    /// An absent amount becomes empty text so the ledger reports it as missing.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let (name, rest) = split_word(line);
        if name.is_empty() {
            return Ok(None);
        }
        let (amount, label) = split_word(rest);
        let amount = amount.to_string();
        let label = label.trim_end().to_string();

        let command = match name.to_lowercase().as_str() {
            "income" => Command::Income {
                amount,
                source: label,
            },
            "expense" => Command::Expense {
                amount,
                category: label,
            },
            "goal" => Command::Goal { amount },
            "save" => Command::Save { amount },
            "summary" => Command::ToggleSummary,
            "show" => Command::Show,
            "entries" => Command::Entries,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(name.to_string()),
        };
        Ok(Some(command))
    }
}

/// Split off the first word. The remainder keeps its inner spacing.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim_start()),
        None => (text, ""),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Print summaries as JSON instead of labelled lines
    pub json: bool,
    /// Re-render the summary after every accepted change
    pub show_summary: bool,
    /// Print a prompt before reading each line
    pub prompt: bool,
}

/// Line-oriented front end over a [`Ledger`].
pub struct Shell<W: Write> {
    ledger: Ledger,
    options: ShellOptions,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(ledger: Ledger, options: ShellOptions, out: W) -> Self {
        Self {
            ledger,
            options,
            out,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn summary_visible(&self) -> bool {
        self.options.show_summary
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute lines until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.options.prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if !self.execute(&line?)? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line. Returns `false` when the session should end.
    pub fn execute(&mut self, line: &str) -> Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(name) => {
                writeln!(self.out, "Unknown command '{}'. Type 'help' for commands.", name)?;
                return Ok(true);
            }
        };

        match command {
            Command::Income { amount, source } => {
                let result = self.ledger.add_income(&source, &amount);
                self.apply(result)?;
            }
            Command::Expense { amount, category } => {
                let result = self.ledger.add_expense(&category, &amount);
                self.apply(result)?;
            }
            Command::Goal { amount } => {
                let result = self.ledger.set_savings_goal(&amount);
                self.apply(result)?;
            }
            Command::Save { amount } => {
                let result = self.ledger.add_to_savings(&amount);
                self.apply(result)?;
            }
            Command::ToggleSummary => {
                self.options.show_summary = !self.options.show_summary;
                if self.options.show_summary {
                    let summary = self.ledger.compute_summary();
                    self.print_summary(&summary)?;
                } else {
                    writeln!(self.out, "Summary hidden")?;
                }
            }
            Command::Show => {
                let summary = self.ledger.compute_summary();
                self.print_summary(&summary)?;
            }
            Command::Entries => self.print_entries()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn apply(&mut self, result: Result<Summary, LedgerError>) -> Result<()> {
        let mut warnings = WriterNotifier::new(&mut self.out);
        let accepted = report(result, &mut warnings);
        warnings.finish()?;

        if let Some(summary) = accepted {
            if self.options.show_summary {
                self.print_summary(&summary)?;
            }
        }
        Ok(())
    }

    fn print_summary(&mut self, summary: &Summary) -> Result<()> {
        if self.options.json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(summary)?)?;
        } else {
            write!(self.out, "{}", summary.render())?;
        }
        Ok(())
    }

    fn print_entries(&mut self) -> Result<()> {
        let currency = self.ledger.currency();
        let income = self.ledger.income();
        let expenses = self.ledger.expenses();

        if self.options.json {
            let entries = serde_json::json!({ "income": income, "expenses": expenses });
            writeln!(self.out, "{}", serde_json::to_string_pretty(&entries)?)?;
            return Ok(());
        }

        if income.is_empty() && expenses.is_empty() {
            writeln!(self.out, "No entries recorded.")?;
            return Ok(());
        }

        writeln!(self.out, "{:<8} {:<20} {:>14}  {}", "KIND", "LABEL", "AMOUNT", "RECORDED")?;
        writeln!(self.out, "{}", "-".repeat(64))?;
        for entry in income {
            writeln!(
                self.out,
                "{:<8} {:<20} {:>14}  {}",
                "income",
                entry.source,
                format_money(currency, entry.amount),
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        for entry in expenses {
            writeln!(
                self.out,
                "{:<8} {:<20} {:>14}  {}",
                "expense",
                entry.category,
                format_money(currency, entry.amount),
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        Ok(())
    }
}

/// Writes warnings inline as `Warning: <message>`. Acknowledgement is
/// implicit once the line is written.
pub struct WriterNotifier<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> WriterNotifier<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    /// Surface the first write failure, if any.
    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> Notifier for WriterNotifier<'_, W> {
    fn warn(&mut self, title: &str, message: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}: {}", title, message) {
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_income_with_multi_word_source() {
        assert_eq!(
            Command::parse("income 1000 Side gig"),
            Ok(Some(Command::Income {
                amount: "1000".into(),
                source: "Side gig".into(),
            }))
        );
    }

    #[test]
    fn test_parse_keeps_label_spacing() {
        assert_eq!(
            Command::parse("  expense   12.5   Rent  and  utilities  "),
            Ok(Some(Command::Expense {
                amount: "12.5".into(),
                category: "Rent  and  utilities".into(),
            }))
        );
    }

    #[test]
    fn test_parse_missing_amount() {
        assert_eq!(
            Command::parse("goal"),
            Ok(Some(Command::Goal {
                amount: String::new()
            }))
        );
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(Command::parse("withdraw 5"), Err("withdraw".to_string()));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("QUIT"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("Summary"), Ok(Some(Command::ToggleSummary)));
    }

    #[test]
    fn test_writer_notifier_formats_title() {
        let mut out = Vec::new();
        let mut notifier = WriterNotifier::new(&mut out);
        notifier.warn("Warning", "Invalid Amount");
        notifier.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Warning: Invalid Amount\n");
    }
}
