use model::entities::transaction::{Transaction, TransactionType};
use std::collections::HashSet;
use tracing::trace;

/// Classification of a transaction for balance aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Adds to the account balance.
    Income,
    /// Subtracts from the account balance.
    Expense,
    /// Moves value between accounts; excluded from income and expense totals.
    Transfer,
    /// Unrecognized; excluded from both totals rather than misclassified.
    Other,
}

/// Categorizes transactions as income, expense, or transfer.
///
/// Membership of the income and expense sets is enumerated by the caller.
/// A transaction tagged with the transfer category is always a transfer,
/// regardless of its declared type.
#[derive(Debug, Clone)]
pub struct TransactionClassifier {
    income_types: HashSet<TransactionType>,
    expense_types: HashSet<TransactionType>,
    transfer_category_id: Option<i32>,
}

impl TransactionClassifier {
    /// Creates a classifier with explicit membership tables.
    pub fn new(
        income_types: HashSet<TransactionType>,
        expense_types: HashSet<TransactionType>,
        transfer_category_id: Option<i32>,
    ) -> Self {
        Self {
            income_types,
            expense_types,
            transfer_category_id,
        }
    }

    /// Sets the transfer category marker, consuming and returning the classifier.
    pub fn with_transfer_category(mut self, transfer_category_id: Option<i32>) -> Self {
        self.transfer_category_id = transfer_category_id;
        self
    }

    pub fn transfer_category_id(&self) -> Option<i32> {
        self.transfer_category_id
    }

    /// Classifies a single transaction.
    ///
    /// The transfer category always wins; otherwise the declared type is
    /// looked up in the membership tables, and anything unrecognized is
    /// `Other` so that new transaction kinds never distort balances.
    pub fn classify(&self, transaction: &Transaction) -> TransactionKind {
        if let (Some(marker), Some(category_id)) =
            (self.transfer_category_id, transaction.category_id)
        {
            if marker == category_id {
                trace!(
                    transaction_id = transaction.id,
                    "Transaction tagged with the transfer category"
                );
                return TransactionKind::Transfer;
            }
        }

        if self.income_types.contains(&transaction.transaction_type) {
            TransactionKind::Income
        } else if self.expense_types.contains(&transaction.transaction_type) {
            TransactionKind::Expense
        } else {
            trace!(
                transaction_id = transaction.id,
                transaction_type = transaction.transaction_type.name(),
                "Unrecognized transaction type classified as other"
            );
            TransactionKind::Other
        }
    }
}

impl Default for TransactionClassifier {
    /// Default membership: revenue and incoming transfers count as income;
    /// payments, expenses, and outgoing transfers count as expense. Transfer
    /// legs are expected to carry the transfer category, which overrides
    /// these tables.
    fn default() -> Self {
        Self {
            income_types: HashSet::from([TransactionType::Revenue, TransactionType::TransferIn]),
            expense_types: HashSet::from([
                TransactionType::Payment,
                TransactionType::Expense,
                TransactionType::TransferOut,
            ]),
            transfer_category_id: None,
        }
    }
}
