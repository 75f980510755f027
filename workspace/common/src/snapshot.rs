use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account payload supplied by the external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountDto {
    pub id: i32,
    pub name: String,
    pub number: String,
    pub currency_code: String,
    /// Exact decimal, serialized as a string to avoid float drift.
    #[serde(with = "rust_decimal::serde::str")]
    pub opening_balance: Decimal,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Transaction payload supplied by the external collaborator.
///
/// The type is a free-form name on purpose: unrecognized names survive
/// deserialization and classify as "other" instead of failing the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: i32,
    pub account_id: i32,
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency_code: String,
    /// Rate of `currency_code` against the base currency at recording time.
    #[serde(with = "rust_decimal::serde::str")]
    pub currency_rate: Decimal,
    #[serde(default)]
    pub category_id: Option<i32>,
    pub paid_at: NaiveDateTime,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub reconciled: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Category payload supplied by the external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    /// Kind name: "income", "expense", "item", or "other".
    pub kind: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// One currency's rate against the fixed base currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateDto {
    pub code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

/// The full snapshot an external collaborator hands to the engine: accounts,
/// their transaction log, the category registry, and a rate table snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub accounts: Vec<AccountDto>,
    #[serde(default)]
    pub transactions: Vec<TransactionDto>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub rates: Vec<RateDto>,
}

fn default_true() -> bool {
    true
}
