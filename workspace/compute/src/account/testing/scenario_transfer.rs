use rust_decimal::Decimal;

use crate::account::testing::helpers::{new_account, new_income, new_transfer_pair};
use crate::account::testing::{TestScenario, TestScenarioBuilder};
use model::entities::category::{Category, CategoryKind};
use model::entities::currency::RateTable;

/// Transfer exclusion: both legs of a transfer are tagged with the transfer
/// category and affect neither side's income or expense sums, even when a
/// leg carries an income-typed transaction.
pub struct ScenarioTransfer {}

impl ScenarioTransfer {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioTransfer {
    fn get_scenario(&self) -> TestScenario {
        let categories = vec![
            Category::new(1, "Sales", CategoryKind::Income),
            // The transfer marker: first enabled category of kind Other
            Category::new(2, "Transfer", CategoryKind::Other),
        ];

        let checking = new_account(1, "USD").with_opening_balance(Decimal::new(10000, 2));
        let savings = new_account(2, "USD");

        let mut transactions = vec![
            // $300.00 revenue, categorized as Sales
            new_income(1, &checking, 30000).with_category(1),
        ];
        // $250.00 moved from checking to savings
        transactions.extend(new_transfer_pair(2, &checking, &savings, 25000, 2));
        // A revenue-typed row tagged with the transfer category is still a
        // transfer and must not count as income
        transactions.push(new_income(4, &savings, 12500).with_category(2));

        TestScenario {
            accounts: vec![checking, savings],
            transactions,
            categories,
            rates: RateTable::new(),
            expected: vec![
                // 100.00 opening + 300.00 income; the outgoing leg is excluded
                (1, Decimal::new(40000, 2)),
                // Transfers only: stays at zero
                (2, Decimal::ZERO),
            ],
        }
    }
}
