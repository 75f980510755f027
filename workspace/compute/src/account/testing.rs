pub mod helpers;
pub mod scenario_balance;
pub mod scenario_multi_currency;
pub mod scenario_transfer;

pub use scenario_balance::ScenarioBalance;
pub use scenario_multi_currency::ScenarioMultiCurrency;
pub use scenario_transfer::ScenarioTransfer;

use model::entities::account::Account;
use model::entities::category::{Category, transfer_category};
use model::entities::currency::RateTable;
use model::entities::transaction::Transaction;
use rust_decimal::Decimal;

use crate::default_engine;
use crate::error::Result as EngineResult;

/// Type representing the expected result of a test scenario,
/// in the following schema (account_id, expected balance)
pub type AssertResult = Vec<(i32, Decimal)>;

/// Prepared test scenario.
pub struct TestScenario {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub rates: RateTable,
    pub expected: AssertResult,
}

/// Trait for building test scenarios.
pub trait TestScenarioBuilder {
    fn get_scenario(&self) -> TestScenario;
}

/// Runs a scenario through a default engine (transfer marker resolved from
/// the scenario's categories) and asserts every expected balance.
pub fn run_and_assert_scenario(builder: &dyn TestScenarioBuilder) -> EngineResult<()> {
    let scenario = builder.get_scenario();
    let engine = default_engine(transfer_category(&scenario.categories));

    let balances = engine.balances(
        &scenario.accounts,
        &scenario.transactions,
        &scenario.rates,
    )?;

    for (account_id, expected) in &scenario.expected {
        let actual = balances
            .iter()
            .find(|b| b.account_id == *account_id)
            .unwrap_or_else(|| panic!("no balance computed for account {account_id}"));
        assert_eq!(
            actual.balance, *expected,
            "account {} balance mismatch",
            account_id
        );
    }

    Ok(())
}
