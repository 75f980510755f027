use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// The declared type of a transaction.
///
/// This is a closed set; type names coming from external collaborators that
/// do not match any known variant map to `Other` instead of failing, so new
/// transaction kinds never break balance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money received, e.g. a customer payment for an invoice.
    Revenue,
    /// Money paid out, e.g. a supplier payment for a bill.
    Payment,
    /// A plain expense without a bill document.
    Expense,
    /// The receiving leg of a transfer between two accounts.
    TransferIn,
    /// The sending leg of a transfer between two accounts.
    TransferOut,
    /// Catch-all for unrecognized type names.
    Other,
}

impl TransactionType {
    /// Resolves a type name supplied by an external collaborator.
    /// Unrecognized names resolve to `Other`; this never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "revenue" | "income" => Self::Revenue,
            "payment" => Self::Payment,
            "expense" => Self::Expense,
            "transfer-in" | "transfer_in" => Self::TransferIn,
            "transfer-out" | "transfer_out" => Self::TransferOut,
            _ => Self::Other,
        }
    }

    /// The canonical name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Payment => "payment",
            Self::Expense => "expense",
            Self::TransferIn => "transfer-in",
            Self::TransferOut => "transfer-out",
            Self::Other => "other",
        }
    }
}

/// A single ledger transaction against an account.
///
/// The amount is always non-negative; whether it increases or decreases the
/// account balance is decided by classification, not by the stored sign.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: i32,
    /// The account this transaction was recorded against.
    pub account_id: i32,
    pub transaction_type: TransactionType,
    /// The value of the transaction in `currency_code`. Non-negative.
    pub amount: Decimal,
    /// ISO 4217 currency code the amount was recorded in.
    pub currency_code: String,
    /// Rate of `currency_code` against the base currency at recording time.
    pub currency_rate: Decimal,
    /// The category reference. `None` means uncategorized; the "n/a"
    /// placeholder is resolved at the display boundary.
    pub category_id: Option<i32>,
    /// When the transaction was paid.
    pub paid_at: NaiveDateTime,
    /// Set when this instance was generated from a recurring template.
    pub parent_id: Option<i32>,
    /// Whether the transaction has been matched during reconciliation.
    pub reconciled: bool,
    pub description: Option<String>,
}

impl Transaction {
    /// Creates a new transaction recorded in the given currency at rate 1
    /// against the base currency.
    pub fn new(
        id: i32,
        account_id: i32,
        transaction_type: TransactionType,
        amount: Decimal,
        currency_code: impl Into<String>,
        paid_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            account_id,
            transaction_type,
            amount,
            currency_code: currency_code.into(),
            currency_rate: Decimal::ONE,
            category_id: None,
            paid_at,
            parent_id: None,
            reconciled: false,
            description: None,
        }
    }

    /// Sets the recorded conversion rate, consuming and returning the transaction.
    pub fn with_currency_rate(mut self, currency_rate: Decimal) -> Self {
        self.currency_rate = currency_rate;
        self
    }

    /// Sets the category reference, consuming and returning the transaction.
    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Links this transaction to the recurring template it was generated from.
    pub fn with_parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Marks the transaction as reconciled, consuming and returning it.
    pub fn reconciled(mut self) -> Self {
        self.reconciled = true;
        self
    }

    /// Whether this instance was generated from a recurring template.
    pub fn is_recurring_instance(&self) -> bool {
        self.parent_id.is_some()
    }
}
