//! Fixed-point decimal money representation and the carry normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of nano units in one whole currency unit.
pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// A decimal amount of money in a specific currency.
///
/// The value is `units + nanos / 10^9`. In canonical form `nanos` lies in
/// `[0, 10^9)` and `units` alone carries the sign, so `-1.5` is stored as
/// `units = -2, nanos = 500_000_000`. Values are immutable once handed to a
/// caller; conversion builds fresh amounts rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Whole currency units.
    pub units: i64,
    /// Fractional part, scaled by 10^9.
    pub nanos: i32,
    /// ISO-4217-style currency code, e.g. "USD".
    pub currency_code: String,
}

impl MoneyAmount {
    /// Creates a new amount. No normalization is performed; conversion and
    /// charge logic only ever produce canonical values.
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Self {
        Self {
            units,
            nanos,
            currency_code: currency_code.into(),
        }
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Approximate value as a float, for tolerance checks.
    pub fn to_f64(&self) -> f64 {
        self.units as f64 + self.nanos as f64 / NANOS_PER_UNIT as f64
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.units as i128 * NANOS_PER_UNIT as i128 + self.nanos as i128;
        let sign = if total < 0 { "-" } else { "" };
        let abs = total.unsigned_abs();
        write!(
            f,
            "{}{}.{:09} {}",
            sign,
            abs / NANOS_PER_UNIT as u128,
            abs % NANOS_PER_UNIT as u128,
            self.currency_code
        )
    }
}

/// An amount mid-computation, before renormalization.
///
/// Rate arithmetic divides or multiplies `units` and `nanos` independently,
/// which leaves fractional units and out-of-range nanos behind. `carry`
/// restores canonical form and must run after every such step, since
/// downstream rounding and comparisons assume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawAmount {
    pub units: f64,
    pub nanos: f64,
}

impl RawAmount {
    pub fn new(units: f64, nanos: f64) -> Self {
        Self { units, nanos }
    }

    /// Renormalizes so that `units` is integral and `nanos` lies in
    /// `[0, 10^9)`.
    ///
    /// Uses floor-division semantics throughout, so negative values carry
    /// into the units: `(-1.5, 0)` becomes `(-2, 500_000_000)`.
    pub fn carry(self) -> RawAmount {
        let fraction = NANOS_PER_UNIT as f64;

        let mut units = self.units.floor();
        let mut nanos = self.nanos + (self.units - units) * fraction;

        let overflow = (nanos / fraction).floor();
        units += overflow;
        nanos -= overflow * fraction;

        RawAmount { units, nanos }
    }
}

impl From<&MoneyAmount> for RawAmount {
    fn from(amount: &MoneyAmount) -> Self {
        Self {
            units: amount.units as f64,
            nanos: amount.nanos as f64,
        }
    }
}
