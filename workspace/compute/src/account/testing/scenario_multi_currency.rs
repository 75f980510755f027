use rust_decimal::Decimal;

use crate::account::testing::helpers::{new_account, rates_usd_eur, tx_with_currency};
use crate::account::testing::{TestScenario, TestScenarioBuilder};
use model::entities::transaction::TransactionType;

/// Cross-currency normalization: an EUR-recorded revenue lands on a USD
/// account converted through the base currency and rounded half-up.
pub struct ScenarioMultiCurrency {}

impl ScenarioMultiCurrency {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMultiCurrency {
    fn get_scenario(&self) -> TestScenario {
        let account = new_account(1, "USD");

        let transactions = vec![
            // 100.00 EUR recorded at rate 1.10; USD currently at 1.05:
            // 100.00 / 1.10 * 1.05 = 95.45 after half-up rounding
            tx_with_currency(
                1,
                &account,
                TransactionType::Revenue,
                10000,
                "EUR",
                Decimal::new(110, 2),
            ),
        ];

        TestScenario {
            accounts: vec![account],
            transactions,
            categories: Vec::new(),
            rates: rates_usd_eur(),
            expected: vec![(1, Decimal::new(9545, 2))],
        }
    }
}
