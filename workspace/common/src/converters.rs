//! Converter functions for assembling report payloads.
//!
//! These take individual fields rather than engine types so this crate stays
//! free of a dependency on the compute module; the caller that has both in
//! scope does the field plumbing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::report::{AccountBalanceDto, AccountStatsDto, BalanceReport, StatsReport};

/// Builds a display-ready balance entry from computed fields.
pub fn balance_to_dto(
    account_id: i32,
    name: &str,
    currency_code: &str,
    balance: Decimal,
) -> AccountBalanceDto {
    AccountBalanceDto {
        account_id,
        name: name.to_string(),
        currency_code: currency_code.to_string(),
        balance,
    }
}

/// Assembles a balance report from display-ready entries.
pub fn balance_report(balances: Vec<AccountBalanceDto>) -> BalanceReport {
    debug!("Assembled balance report with {} entries", balances.len());
    BalanceReport { balances }
}

/// Builds a display-ready statistics entry from computed fields.
pub fn stats_to_dto(
    account_id: i32,
    name: &str,
    currency_code: &str,
    income_total: Decimal,
    expense_total: Decimal,
    net: Decimal,
) -> AccountStatsDto {
    AccountStatsDto {
        account_id,
        name: name.to_string(),
        currency_code: currency_code.to_string(),
        income_total,
        expense_total,
        net,
    }
}

/// Assembles a statistics report from display-ready entries.
pub fn stats_report(stats: Vec<AccountStatsDto>) -> StatsReport {
    debug!("Assembled statistics report with {} entries", stats.len());
    StatsReport { stats }
}
