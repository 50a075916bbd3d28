use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::Ledger;
use crate::domain::DEFAULT_CURRENCY;

mod shell;

pub use shell::*;

/// Pitaka - track income, expenses and a savings goal for one session
#[derive(Parser, Debug)]
#[command(name = "pitaka")]
#[command(about = "Track income, expenses and a savings goal with a live summary")]
#[command(version)]
pub struct Cli {
    /// Currency symbol prefixed to amounts
    #[arg(short, long, env = "PITAKA_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Print summaries as JSON
    #[arg(long)]
    pub json: bool,

    /// Start with the summary visible
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Install the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
    pub fn init_tracing(&self) {
        let default = if self.verbose {
            "pitaka=debug"
        } else {
            "pitaka=warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        // A subscriber may already be installed when embedded in another process
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            json: self.json,
            show_summary: self.summary,
            prompt: io::stdin().is_terminal(),
        }
    }

    /// Run an interactive session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let options = self.shell_options();
        info!(currency = %self.currency, json = self.json, "starting session");

        let ledger = Ledger::with_currency(self.currency);
        let mut shell = Shell::new(ledger, options, io::stdout().lock());
        shell.run(io::stdin().lock())?;

        info!("session ended");
        Ok(())
    }
}
