use chrono::{NaiveDate, NaiveDateTime};
use model::entities::account::Account;
use model::entities::currency::RateTable;
use model::entities::transaction::{Transaction, TransactionType};
use rust_decimal::Decimal;

/// A paid-at date in January 2024, used so ordering tests stay readable.
pub fn paid_on(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn paid_at_for(id: i32) -> NaiveDateTime {
    paid_on(10 + id as u32).and_hms_opt(12, 0, 0).unwrap()
}

pub fn new_account(id: i32, currency_code: &str) -> Account {
    Account::new(id, format!("Test account {id}"), format!("{id:03}"), currency_code)
}

/// A revenue transaction in the account's own currency. Amount in cents.
pub fn new_income(id: i32, account: &Account, cents: i64) -> Transaction {
    Transaction::new(
        id,
        account.id,
        TransactionType::Revenue,
        Decimal::new(cents, 2),
        account.currency_code.clone(),
        paid_at_for(id),
    )
}

/// A payment transaction in the account's own currency. Amount in cents.
pub fn new_expense(id: i32, account: &Account, cents: i64) -> Transaction {
    Transaction::new(
        id,
        account.id,
        TransactionType::Payment,
        Decimal::new(cents, 2),
        account.currency_code.clone(),
        paid_at_for(id),
    )
}

/// A transaction recorded in a foreign currency at the given recorded rate.
pub fn tx_with_currency(
    id: i32,
    account: &Account,
    transaction_type: TransactionType,
    cents: i64,
    currency_code: &str,
    currency_rate: Decimal,
) -> Transaction {
    Transaction::new(
        id,
        account.id,
        transaction_type,
        Decimal::new(cents, 2),
        currency_code,
        paid_at_for(id),
    )
    .with_currency_rate(currency_rate)
}

/// Both legs of a transfer, tagged with the transfer category: the outgoing
/// leg on `from` under `id`, the incoming leg on `to` under `id + 1`.
pub fn new_transfer_pair(
    id: i32,
    from: &Account,
    to: &Account,
    cents: i64,
    transfer_category_id: i32,
) -> Vec<Transaction> {
    vec![
        Transaction::new(
            id,
            from.id,
            TransactionType::TransferOut,
            Decimal::new(cents, 2),
            from.currency_code.clone(),
            paid_at_for(id),
        )
        .with_category(transfer_category_id),
        Transaction::new(
            id + 1,
            to.id,
            TransactionType::TransferIn,
            Decimal::new(cents, 2),
            to.currency_code.clone(),
            paid_at_for(id + 1),
        )
        .with_category(transfer_category_id),
    ]
}

/// Rate table with USD at 1.05 and EUR at 1.10 against the base currency.
pub fn rates_usd_eur() -> RateTable {
    RateTable::from_rates([
        ("USD", Decimal::new(105, 2)),
        ("EUR", Decimal::new(110, 2)),
    ])
}
