use anyhow::{Result, anyhow};
use compute::currency::CurrencyConverter;
use compute::error::EngineError;
use rust_decimal::Decimal;
use tracing::info;

use super::load_snapshot;
use crate::helpers::converters::rate_table_from_dtos;

/// Converts an amount between two currencies using the snapshot's rate table.
pub fn run(snapshot_path: &str, amount: Decimal, from: &str, to: &str) -> Result<()> {
    info!("Converting {} {} -> {}", amount, from, to);

    let snapshot = load_snapshot(snapshot_path)?;
    let rates = rate_table_from_dtos(&snapshot.rates).map_err(|e| anyhow!(e))?;

    let converter = CurrencyConverter::new();

    let converted = if from == to {
        amount
    } else {
        let from_rate = rates
            .rate(from)
            .ok_or_else(|| EngineError::UnknownCurrency(from.to_string()))?;
        let to_rate = rates
            .rate(to)
            .ok_or_else(|| EngineError::UnknownCurrency(to.to_string()))?;
        converter.convert_between(amount, from, from_rate, to, to_rate)?
    };

    println!("{amount} {from} = {converted} {to}");
    Ok(())
}
