pub mod account;
pub mod account_stats;
pub mod classify;
pub mod currency;
pub mod engine;
pub mod error;

use classify::TransactionClassifier;
use currency::CurrencyConverter;
use engine::BalanceEngine;

/// Returns a default pre-configured engine that will be used most of the time.
///
/// The classifier uses the default income/expense membership with the given
/// transfer category marker; the converter rounds half-up to two fractional
/// digits.
pub fn default_engine(transfer_category_id: Option<i32>) -> BalanceEngine {
    // Create the classifier with the scope's transfer marker
    let classifier = TransactionClassifier::default().with_transfer_category(transfer_category_id);

    // Create the converter with the default precision
    let converter = CurrencyConverter::new();

    BalanceEngine::new(classifier, converter)
}
