use model::entities::currency::RateTable;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{instrument, trace};

use crate::error::{EngineError, Result};

/// Converts amounts between currencies using rate snapshots taken against a
/// fixed base currency.
///
/// Conversion goes through the base: `base = amount / from_rate`, then
/// `result = base * to_rate`. Results are rounded half-up to a fixed number
/// of fractional digits so repeated conversions stay stable. The converter
/// performs no I/O; rates always come from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConverter {
    /// Number of fractional digits kept after a conversion.
    precision: u32,
}

impl CurrencyConverter {
    pub const DEFAULT_PRECISION: u32 = 2;

    /// Creates a converter with the default precision of two fractional digits.
    pub fn new() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Creates a converter that rounds to the given number of fractional digits.
    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Converts an amount between two currencies given their rates against
    /// the base currency.
    ///
    /// Returns the amount unchanged when both codes match. Fails with
    /// `InvalidRate` when either rate is zero or negative.
    #[instrument(skip(self), fields(precision = self.precision))]
    pub fn convert_between(
        &self,
        amount: Decimal,
        from_code: &str,
        from_rate: Decimal,
        to_code: &str,
        to_rate: Decimal,
    ) -> Result<Decimal> {
        if from_code == to_code {
            trace!("Same currency on both sides, returning amount unchanged");
            return Ok(amount);
        }

        if from_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                code: from_code.to_string(),
                rate: from_rate,
            });
        }
        if to_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                code: to_code.to_string(),
                rate: to_rate,
            });
        }

        let base = amount / from_rate;
        let converted = (base * to_rate)
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);

        trace!(%amount, %converted, "Converted {} -> {}", from_code, to_code);
        Ok(converted)
    }

    /// Converts an amount into the target currency, resolving the target
    /// rate from the supplied table.
    ///
    /// The source rate is the one recorded on the transaction, not a table
    /// lookup; the table only answers for the target side. Fails with
    /// `UnknownCurrency` when the table has no entry for the target code.
    pub fn convert_with_table(
        &self,
        amount: Decimal,
        from_code: &str,
        from_rate: Decimal,
        to_code: &str,
        rates: &RateTable,
    ) -> Result<Decimal> {
        if from_code == to_code {
            return Ok(amount);
        }

        let to_rate = rates
            .rate(to_code)
            .ok_or_else(|| EngineError::UnknownCurrency(to_code.to_string()))?;

        self.convert_between(amount, from_code, from_rate, to_code, to_rate)
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new()
    }
}
