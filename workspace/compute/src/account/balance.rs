use model::entities::account::Account;
use model::entities::currency::RateTable;
use model::entities::transaction::Transaction;
use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};

use crate::account::AccountBalanceCalculator;
use crate::classify::{TransactionClassifier, TransactionKind};
use crate::currency::CurrencyConverter;
use crate::error::{EngineError, Result};

/// Computes the balance of an account by folding classified, currency-
/// normalized transactions onto the opening balance.
///
/// The fold is `opening_balance + sum(income) - sum(expense)`; transfers and
/// unrecognized kinds are excluded from both sums. Amounts recorded in a
/// different currency are normalized into the account currency using the
/// rate recorded on the transaction and the current rate from the table.
#[derive(Debug, Clone, Default)]
pub struct BalanceCalculator {
    classifier: TransactionClassifier,
    converter: CurrencyConverter,
}

impl BalanceCalculator {
    /// Creates a calculator composing the given classifier and converter.
    pub fn new(classifier: TransactionClassifier, converter: CurrencyConverter) -> Self {
        Self {
            classifier,
            converter,
        }
    }

    pub fn classifier(&self) -> &TransactionClassifier {
        &self.classifier
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    /// Normalizes a transaction amount into the account currency.
    ///
    /// Returns the amount unchanged when the transaction was recorded in the
    /// account currency; otherwise converts using the rate recorded on the
    /// transaction and the account currency's rate from the table.
    pub fn amount_for_account(
        &self,
        transaction: &Transaction,
        account: &Account,
        rates: &RateTable,
    ) -> Result<Decimal> {
        self.converter.convert_with_table(
            transaction.amount,
            &transaction.currency_code,
            transaction.currency_rate,
            &account.currency_code,
            rates,
        )
    }

    /// Computes the current balance of the account.
    ///
    /// Only transactions recorded against the account are considered; the
    /// caller may hand over the whole snapshot. An account with no
    /// transactions yields exactly its opening balance.
    #[instrument(skip(self, transactions, rates), fields(account_id = account.id, num_transactions = transactions.len()))]
    pub fn balance(
        &self,
        account: &Account,
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> Result<Decimal> {
        // Opening balance
        let mut total = account.opening_balance;
        let mut income_count = 0usize;
        let mut expense_count = 0usize;

        for transaction in transactions.iter().filter(|t| t.account_id == account.id) {
            if transaction.amount.is_sign_negative() {
                return Err(EngineError::MalformedAmount {
                    transaction_id: transaction.id,
                    amount: transaction.amount,
                });
            }

            match self.classifier.classify(transaction) {
                TransactionKind::Income => {
                    let amount = self.amount_for_account(transaction, account, rates)?;
                    total += amount;
                    income_count += 1;
                }
                TransactionKind::Expense => {
                    let amount = self.amount_for_account(transaction, account, rates)?;
                    total -= amount;
                    expense_count += 1;
                }
                TransactionKind::Transfer | TransactionKind::Other => {
                    trace!(
                        transaction_id = transaction.id,
                        "Excluded from balance aggregation"
                    );
                }
            }
        }

        debug!(
            "Computed balance {} for account {} ({} income, {} expense rows)",
            total, account.id, income_count, expense_count
        );

        Ok(total)
    }
}

impl AccountBalanceCalculator for BalanceCalculator {
    fn account_balance(
        &self,
        account: &Account,
        transactions: &[Transaction],
        rates: &RateTable,
    ) -> Result<Decimal> {
        self.balance(account, transactions, rates)
    }
}
