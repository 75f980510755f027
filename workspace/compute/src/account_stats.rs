//! Account statistics module for computing income and expense aggregates.
//!
//! Aggregates are computed over the full snapshot or over a year/month
//! window, with every amount normalized into the account's own currency the
//! same way balance computation normalizes it.

use chrono::NaiveDate;
use model::entities::account::Account;
use model::entities::currency::RateTable;
use model::entities::transaction::Transaction;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::account::days_in_month;
use crate::engine::BalanceEngine;
use crate::error::Result;

/// Income and expense aggregates for a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStats {
    pub account_id: i32,
    /// Sum of classified income, in the account currency.
    pub income_total: Decimal,
    /// Sum of classified expense, in the account currency.
    pub expense_total: Decimal,
    /// `income_total - expense_total`.
    pub net: Decimal,
}

/// Computes aggregates for every account over the whole snapshot.
#[instrument(skip(engine, accounts, transactions, rates), fields(num_accounts = accounts.len(), num_transactions = transactions.len()))]
pub fn stats_for_accounts(
    engine: &BalanceEngine,
    accounts: &[Account],
    transactions: &[Transaction],
    rates: &RateTable,
) -> Result<Vec<AccountStats>> {
    let mut stats = Vec::with_capacity(accounts.len());

    for account in accounts {
        stats.push(stats_for_account(engine, account, transactions, rates)?);
    }

    debug!("Computed statistics for {} accounts", stats.len());
    Ok(stats)
}

/// Computes aggregates for every account over the specified year.
#[instrument(skip(engine, accounts, transactions, rates))]
pub fn stats_in_year(
    engine: &BalanceEngine,
    accounts: &[Account],
    transactions: &[Transaction],
    rates: &RateTable,
    year: i32,
) -> Result<Vec<AccountStats>> {
    let start_date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end_date = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();

    let window = window(engine, transactions, start_date, end_date);
    stats_for_accounts(engine, accounts, &window, rates)
}

/// Computes aggregates for every account over the specified month.
#[instrument(skip(engine, accounts, transactions, rates))]
pub fn stats_in_month(
    engine: &BalanceEngine,
    accounts: &[Account],
    transactions: &[Transaction],
    rates: &RateTable,
    year: i32,
    month: u32,
) -> Result<Vec<AccountStats>> {
    let start_date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let end_date = get_last_day_of_month(year, month);

    let window = window(engine, transactions, start_date, end_date);
    stats_for_accounts(engine, accounts, &window, rates)
}

fn stats_for_account(
    engine: &BalanceEngine,
    account: &Account,
    transactions: &[Transaction],
    rates: &RateTable,
) -> Result<AccountStats> {
    let calculator = engine.calculator();

    let mut income_total = Decimal::ZERO;
    for transaction in engine.income_of(account, transactions) {
        income_total += calculator.amount_for_account(transaction, account, rates)?;
    }

    let mut expense_total = Decimal::ZERO;
    for transaction in engine.expense_of(account, transactions) {
        expense_total += calculator.amount_for_account(transaction, account, rates)?;
    }

    Ok(AccountStats {
        account_id: account.id,
        income_total,
        expense_total,
        net: income_total - expense_total,
    })
}

fn window(
    engine: &BalanceEngine,
    transactions: &[Transaction],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<Transaction> {
    engine
        .paid_between(transactions, start_date, end_date)
        .into_iter()
        .cloned()
        .collect()
}

fn get_last_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap()
}
