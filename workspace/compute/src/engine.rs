use chrono::NaiveDate;
use model::entities::account::Account;
use model::entities::currency::RateTable;
use model::entities::transaction::Transaction;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::account::AccountBalanceCalculator;
use crate::account::balance::BalanceCalculator;
use crate::classify::{TransactionClassifier, TransactionKind};
use crate::currency::CurrencyConverter;
use crate::error::Result;

/// The computed balance of a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_id: i32,
    pub balance: Decimal,
}

/// Read-only query surface over a caller-supplied snapshot of accounts and
/// transactions.
///
/// Every operation is a pure transformation returning an eagerly
/// materialized sequence; the engine keeps no state between calls and is
/// safe to share across threads. Taking a consistent snapshot is the
/// caller's concern.
#[derive(Debug, Clone, Default)]
pub struct BalanceEngine {
    classifier: TransactionClassifier,
    calculator: BalanceCalculator,
}

impl BalanceEngine {
    /// Creates an engine from a classifier and a converter. The balance
    /// calculator composes the same classifier by delegation.
    pub fn new(classifier: TransactionClassifier, converter: CurrencyConverter) -> Self {
        let calculator = BalanceCalculator::new(classifier.clone(), converter);
        Self {
            classifier,
            calculator,
        }
    }

    pub fn classifier(&self) -> &TransactionClassifier {
        &self.classifier
    }

    pub fn calculator(&self) -> &BalanceCalculator {
        &self.calculator
    }

    /// Computes balances for every account in the snapshot.
    #[instrument(skip(self, accounts, transactions, rates), fields(num_accounts = accounts.len(), num_transactions = transactions.len()))]
    pub fn balances(
        &self,
        accounts: &[Account],
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> Result<Vec<AccountBalance>> {
        let mut balances = Vec::with_capacity(accounts.len());

        for account in accounts {
            let balance = self
                .calculator
                .account_balance(account, transactions, rates)?;
            balances.push(AccountBalance {
                account_id: account.id,
                balance,
            });
        }

        debug!("Computed balances for {} accounts", balances.len());
        Ok(balances)
    }

    /// Accounts whose name matches exactly.
    pub fn by_name<'a>(&self, accounts: &'a [Account], name: &str) -> Vec<&'a Account> {
        accounts.iter().filter(|a| a.name == name).collect()
    }

    /// Accounts whose number matches exactly.
    pub fn by_number<'a>(&self, accounts: &'a [Account], number: &str) -> Vec<&'a Account> {
        accounts.iter().filter(|a| a.number == number).collect()
    }

    /// The account's transactions classified as income.
    ///
    /// Transfer-tagged transactions appear in neither this nor `expense_of`.
    pub fn income_of<'a>(
        &self,
        account: &Account,
        transactions: &'a [Transaction],
    ) -> Vec<&'a Transaction> {
        self.of_kind(account, transactions, TransactionKind::Income)
    }

    /// The account's transactions classified as expense.
    pub fn expense_of<'a>(
        &self,
        account: &Account,
        transactions: &'a [Transaction],
    ) -> Vec<&'a Transaction> {
        self.of_kind(account, transactions, TransactionKind::Expense)
    }

    fn of_kind<'a>(
        &self,
        account: &Account,
        transactions: &'a [Transaction],
        kind: TransactionKind,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.account_id == account.id && self.classifier.classify(t) == kind)
            .collect()
    }

    /// Transactions filtered by reconciliation state.
    pub fn is_reconciled<'a>(
        &self,
        transactions: &'a [Transaction],
        flag: bool,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| t.reconciled == flag)
            .collect()
    }

    /// Transactions paid within the inclusive date range.
    pub fn paid_between<'a>(
        &self,
        transactions: &'a [Transaction],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| {
                let paid_on = t.paid_at.date();
                paid_on >= start_date && paid_on <= end_date
            })
            .collect()
    }

    /// Transactions ordered by paid-at descending.
    pub fn latest<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by(|a, b| b.paid_at.cmp(&a.paid_at));
        ordered
    }

    /// Total amount of the supplied transactions, used for reconciliation
    /// reporting. Sums raw recorded amounts without currency normalization.
    pub fn sum_paid<'a, I>(&self, transactions: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().map(|t| t.amount).sum()
    }
}
