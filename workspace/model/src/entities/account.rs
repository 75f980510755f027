use rust_decimal::Decimal;

/// Represents a ledger account, like a bank account, credit card, or cash wallet.
///
/// The current balance of an account is always derived from its opening
/// balance and its transaction log; it is never stored on the account itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub name: String,
    /// The account number as issued by the bank.
    pub number: String,
    /// ISO 4217 currency code, e.g., "USD", "EUR".
    pub currency_code: String,
    /// The starting value assigned before any transactions are applied.
    /// Kept as an exact decimal so repeated recomputation never drifts.
    pub opening_balance: Decimal,
    /// Disabled accounts are hidden from listings but can still be computed.
    pub enabled: bool,
}

impl Account {
    /// Creates a new enabled account with a zero opening balance.
    pub fn new(id: i32, name: impl Into<String>, number: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            currency_code: currency_code.into(),
            opening_balance: Decimal::ZERO,
            enabled: true,
        }
    }

    /// Sets the opening balance, consuming and returning the account.
    pub fn with_opening_balance(mut self, opening_balance: Decimal) -> Self {
        self.opening_balance = opening_balance;
        self
    }

    /// Marks the account as disabled, consuming and returning the account.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
