//! Currency Conversion Service
//!
//! Converts money amounts between currencies by routing through the pivot
//! currency of the rate table. Pure orchestration over domain types; no IO.

use checkout_types::{DomainError, MoneyAmount, RawAmount};
use currency_rates::RateTable;

/// Application service for currency conversion.
///
/// Holds the read-only rate table injected at construction. Shareable across
/// concurrent call sites; nothing here mutates.
pub struct CurrencyService {
    rates: RateTable,
}

impl CurrencyService {
    /// Creates a conversion service over the given rate table.
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Returns a reference to the underlying rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Currency codes this service can convert between, sorted.
    pub fn supported_currencies(&self) -> Vec<String> {
        self.rates.currency_codes().map(str::to_string).collect()
    }

    /// Converts `amount` into `to_code` via the pivot currency.
    ///
    /// Two hops: divide by the source rate into pivot units (carrying, then
    /// rounding nanos half away from zero), multiply by the target rate
    /// (carrying, then flooring both fields). The round-then-floor asymmetry
    /// biases the second hop slightly downward; it is a pinned precision
    /// policy, so converting an amount to its own currency may drift by a
    /// sub-unit fraction.
    pub fn convert(&self, amount: &MoneyAmount, to_code: &str) -> Result<MoneyAmount, DomainError> {
        let from_rate = self
            .rates
            .rate(&amount.currency_code)
            .ok_or_else(|| DomainError::UnknownCurrency(amount.currency_code.clone()))?;
        let to_rate = self
            .rates
            .rate(to_code)
            .ok_or_else(|| DomainError::UnknownCurrency(to_code.to_string()))?;

        // Hop 1: source currency -> pivot.
        let mut pivot = RawAmount::new(
            amount.units as f64 / from_rate,
            amount.nanos as f64 / from_rate,
        )
        .carry();
        pivot.nanos = pivot.nanos.round();

        // Hop 2: pivot -> target currency.
        let raw = RawAmount::new(pivot.units * to_rate, pivot.nanos * to_rate).carry();

        let converted = MoneyAmount::new(
            raw.units.floor() as i64,
            raw.nanos.floor() as i32,
            to_code,
        );
        tracing::debug!(from = %amount, to = %converted, "converted currency");
        Ok(converted)
    }
}
