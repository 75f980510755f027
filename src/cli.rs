use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

pub mod commands;

use commands::{convert, report, stats};

#[derive(Parser)]
#[command(name = "ledgerust")]
#[command(about = "Ledger balance and multi-currency conversion engine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute balances for every enabled account in a snapshot
    Report {
        /// Path to the ledger snapshot JSON file
        ///
        /// The snapshot carries accounts, transactions, categories, and
        /// currency rates, as produced by the collaborating system.
        #[arg(short, long, env = "LEDGER_SNAPSHOT", default_value = "ledger.json")]
        snapshot: String,

        /// Emit the report as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Compute income and expense aggregates per account
    Stats {
        /// Path to the ledger snapshot JSON file
        #[arg(short, long, env = "LEDGER_SNAPSHOT", default_value = "ledger.json")]
        snapshot: String,

        /// Restrict aggregates to a calendar year
        #[arg(short, long)]
        year: Option<i32>,

        /// Restrict aggregates to a month (1-12) within --year
        #[arg(short, long, requires = "year", value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Emit the report as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
    /// Convert an amount between two currencies using the snapshot's rate table
    Convert {
        /// Path to the ledger snapshot JSON file
        #[arg(short, long, env = "LEDGER_SNAPSHOT", default_value = "ledger.json")]
        snapshot: String,

        /// Amount to convert, e.g. 100.00
        amount: Decimal,

        /// Source currency code, e.g. EUR
        from: String,

        /// Target currency code, e.g. USD
        to: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Report { snapshot, json } => {
                report::run(&snapshot, json)?;
            }
            Commands::Stats {
                snapshot,
                year,
                month,
                json,
            } => {
                stats::run(&snapshot, year, month, json)?;
            }
            Commands::Convert {
                snapshot,
                amount,
                from,
                to,
            } => {
                convert::run(&snapshot, amount, &from, &to)?;
            }
        }
        Ok(())
    }
}
