use rust_decimal::Decimal;

use crate::account::testing::helpers::{new_account, new_expense, new_income};
use crate::account::testing::{TestScenario, TestScenarioBuilder};
use model::entities::currency::RateTable;

/// Single-currency balance folding: opening balance plus income minus
/// expense, with an untouched second account that keeps its (negative)
/// opening balance exactly.
pub struct ScenarioBalance {}

impl ScenarioBalance {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioBalance {
    fn get_scenario(&self) -> TestScenario {
        // Checking account with a $1,000.00 opening balance
        let checking = new_account(1, "USD").with_opening_balance(Decimal::new(100000, 2));

        // Overdrawn account with no transactions at all
        let overdrawn = new_account(2, "USD").with_opening_balance(Decimal::new(-5000, 2));

        let transactions = vec![
            // $500.00 revenue
            new_income(1, &checking, 50000),
            // $200.00 payment
            new_expense(2, &checking, 20000),
        ];

        TestScenario {
            accounts: vec![checking, overdrawn],
            transactions,
            categories: Vec::new(),
            rates: RateTable::new(),
            expected: vec![
                // 1,000.00 + 500.00 - 200.00
                (1, Decimal::new(130000, 2)),
                // Untouched: exactly the opening balance
                (2, Decimal::new(-5000, 2)),
            ],
        }
    }
}
