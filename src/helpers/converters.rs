//! Converter functions bridging snapshot payloads and the engine's model
//! types.
//!
//! Structural validation happens here: currency codes must name ISO 4217
//! currencies. Value-level problems (negative amounts, non-positive rates,
//! missing table entries) are left to the engine, which reports them as
//! typed failures during computation.

use common::{AccountDto, CategoryDto, LedgerSnapshot, RateDto, TransactionDto};
use model::entities::account::Account;
use model::entities::category::{Category, CategoryKind, transfer_category};
use model::entities::currency::{RateTable, is_known_currency};
use model::entities::transaction::{Transaction, TransactionType};
use tracing::debug;

/// A snapshot marshaled into engine types, with the transfer marker already
/// resolved from the category registry.
#[derive(Debug, Clone)]
pub struct LedgerData {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub rates: RateTable,
    pub transfer_category_id: Option<i32>,
}

pub fn account_from_dto(dto: &AccountDto) -> Result<Account, String> {
    if !is_known_currency(&dto.currency_code) {
        return Err(format!(
            "account {}: unknown currency code {}",
            dto.id, dto.currency_code
        ));
    }

    Ok(Account {
        id: dto.id,
        name: dto.name.clone(),
        number: dto.number.clone(),
        currency_code: dto.currency_code.clone(),
        opening_balance: dto.opening_balance,
        enabled: dto.enabled,
    })
}

pub fn transaction_from_dto(dto: &TransactionDto) -> Result<Transaction, String> {
    if !is_known_currency(&dto.currency_code) {
        return Err(format!(
            "transaction {}: unknown currency code {}",
            dto.id, dto.currency_code
        ));
    }

    Ok(Transaction {
        id: dto.id,
        account_id: dto.account_id,
        transaction_type: TransactionType::from_name(&dto.transaction_type),
        amount: dto.amount,
        currency_code: dto.currency_code.clone(),
        currency_rate: dto.currency_rate,
        category_id: dto.category_id,
        paid_at: dto.paid_at,
        parent_id: dto.parent_id,
        reconciled: dto.reconciled,
        description: dto.description.clone(),
    })
}

pub fn category_from_dto(dto: &CategoryDto) -> Category {
    Category {
        id: dto.id,
        name: dto.name.clone(),
        kind: CategoryKind::from_name(&dto.kind),
        enabled: dto.enabled,
    }
}

pub fn rate_table_from_dtos(dtos: &[RateDto]) -> Result<RateTable, String> {
    let mut table = RateTable::new();
    for dto in dtos {
        if !is_known_currency(&dto.code) {
            return Err(format!("rate table: unknown currency code {}", dto.code));
        }
        table.insert(dto.code.clone(), dto.rate);
    }
    Ok(table)
}

/// Marshals a whole snapshot into engine types.
pub fn snapshot_to_data(snapshot: &LedgerSnapshot) -> Result<LedgerData, String> {
    let accounts = snapshot
        .accounts
        .iter()
        .map(account_from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let transactions = snapshot
        .transactions
        .iter()
        .map(transaction_from_dto)
        .collect::<Result<Vec<_>, _>>()?;

    let categories: Vec<Category> = snapshot.categories.iter().map(category_from_dto).collect();
    let rates = rate_table_from_dtos(&snapshot.rates)?;

    let transfer_category_id = transfer_category(&categories);
    debug!(
        ?transfer_category_id,
        "Marshaled snapshot into {} accounts and {} transactions",
        accounts.len(),
        transactions.len()
    );

    Ok(LedgerData {
        accounts,
        transactions,
        rates,
        transfer_category_id,
    })
}
