use anyhow::{Result, anyhow};
use common::{stats_report, stats_to_dto};
use compute::account_stats::{stats_for_accounts, stats_in_month, stats_in_year};
use compute::default_engine;
use tracing::{debug, info};

use super::load_snapshot;
use crate::helpers::converters::snapshot_to_data;

/// Computes and prints income/expense aggregates, optionally restricted to a
/// calendar year or a month within it.
pub fn run(snapshot_path: &str, year: Option<i32>, month: Option<u32>, json: bool) -> Result<()> {
    info!(?year, ?month, "Computing statistics from {}", snapshot_path);

    let snapshot = load_snapshot(snapshot_path)?;
    let data = snapshot_to_data(&snapshot).map_err(|e| anyhow!(e))?;

    let engine = default_engine(data.transfer_category_id);

    let visible: Vec<_> = data
        .accounts
        .iter()
        .filter(|a| a.enabled)
        .cloned()
        .collect();
    debug!("{} of {} accounts enabled", visible.len(), data.accounts.len());

    let stats = match (year, month) {
        (Some(year), Some(month)) => stats_in_month(
            &engine,
            &visible,
            &data.transactions,
            &data.rates,
            year,
            month,
        )?,
        (Some(year), None) => {
            stats_in_year(&engine, &visible, &data.transactions, &data.rates, year)?
        }
        _ => stats_for_accounts(&engine, &visible, &data.transactions, &data.rates)?,
    };

    let entries = visible
        .iter()
        .zip(&stats)
        .map(|(account, computed)| {
            stats_to_dto(
                account.id,
                &account.name,
                &account.currency_code,
                computed.income_total,
                computed.expense_total,
                computed.net,
            )
        })
        .collect();
    let report = stats_report(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.stats {
            println!(
                "{} [{}]: income {} {currency}, expense {} {currency}, net {} {currency}",
                entry.name,
                entry.account_id,
                entry.income_total,
                entry.expense_total,
                entry.net,
                currency = entry.currency_code,
            );
        }
    }

    info!("Statistics report complete: {} accounts", report.stats.len());
    Ok(())
}
