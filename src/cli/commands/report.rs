use anyhow::{Result, anyhow};
use common::{balance_report, balance_to_dto};
use compute::default_engine;
use tracing::{debug, info};

use super::load_snapshot;
use crate::helpers::converters::snapshot_to_data;

/// Computes and prints balances for every enabled account in the snapshot.
pub fn run(snapshot_path: &str, json: bool) -> Result<()> {
    info!("Computing balance report from {}", snapshot_path);

    let snapshot = load_snapshot(snapshot_path)?;
    let data = snapshot_to_data(&snapshot).map_err(|e| anyhow!(e))?;

    let engine = default_engine(data.transfer_category_id);

    // Disabled accounts are a listing concern: hidden here, not un-computable
    let visible: Vec<_> = data
        .accounts
        .iter()
        .filter(|a| a.enabled)
        .cloned()
        .collect();
    debug!("{} of {} accounts enabled", visible.len(), data.accounts.len());

    let balances = engine.balances(&visible, &data.transactions, &data.rates)?;

    // Balances come back in account order, so a zip lines them up
    let entries = visible
        .iter()
        .zip(&balances)
        .map(|(account, computed)| {
            balance_to_dto(
                account.id,
                &account.name,
                &account.currency_code,
                computed.balance,
            )
        })
        .collect();
    let report = balance_report(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.balances {
            println!(
                "{} [{}]: {} {}",
                entry.name, entry.account_id, entry.balance, entry.currency_code
            );
        }
    }

    info!("Balance report complete: {} accounts", report.balances.len());
    Ok(())
}
