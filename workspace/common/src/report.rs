use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed balance of one account, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountBalanceDto {
    pub account_id: i32,
    pub name: String,
    pub currency_code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
}

/// Balance report over a whole snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BalanceReport {
    pub balances: Vec<AccountBalanceDto>,
}

/// Income/expense aggregates of one account, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountStatsDto {
    pub account_id: i32,
    pub name: String,
    pub currency_code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub income_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub expense_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub net: Decimal,
}

/// Statistics report over a whole snapshot or a date window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatsReport {
    pub stats: Vec<AccountStatsDto>,
}
