use rust_decimal::Decimal;
use rusty_money::iso;
use std::collections::HashMap;

/// A read-only snapshot mapping currency codes to their rate against a fixed
/// base currency.
///
/// Rates are supplied by an external collaborator per call; the engine never
/// fetches them. A lookup miss surfaces as `UnknownCurrency` in the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(code, rate)` pairs.
    pub fn from_rates<I, S>(rates: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            rates: rates.into_iter().map(|(c, r)| (c.into(), r)).collect(),
        }
    }

    /// Inserts or replaces the rate for a currency code.
    pub fn insert(&mut self, code: impl Into<String>, rate: Decimal) {
        self.rates.insert(code.into(), rate);
    }

    /// Looks up the rate for a currency code.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Whether the table holds a rate for the given code.
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Iterates over `(code, rate)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(c, r)| (c.as_str(), *r))
    }
}

/// Whether the code names an ISO 4217 currency.
pub fn is_known_currency(code: &str) -> bool {
    iso::find(code).is_some()
}
