//! Static exchange rate table for the storefront checkout core.
//!
//! Every conversion routes through a single pivot currency (EUR), so the
//! table is one column: currency code to units of that currency per one EUR.
//! The table is loaded once, validated, and treated as read-only for the
//! lifetime of the process; it is freely shareable across threads.
//!
//! # Example
//! ```
//! use currency_rates::RateTable;
//!
//! let table = RateTable::builtin();
//! assert_eq!(table.rate("EUR"), Some(1.0));
//! assert!(table.contains("USD"));
//! ```

use std::collections::BTreeMap;
use std::path::Path;

/// The pivot currency every conversion routes through.
pub const PIVOT_CURRENCY: &str = "EUR";

/// Storefront rate sheet: units of each currency per one EUR.
///
/// Re-pricing is a single-column update here; no pairwise table to maintain.
const BUILTIN_RATES: &[(&str, f64)] = &[
    ("EUR", 1.0),
    ("USD", 1.1305),
    ("JPY", 126.40),
    ("BGN", 1.9558),
    ("CZK", 25.592),
    ("DKK", 7.4609),
    ("GBP", 0.85970),
    ("HUF", 315.51),
    ("PLN", 4.2996),
    ("RON", 4.7463),
    ("SEK", 10.5375),
    ("CHF", 1.1360),
    ("ISK", 137.40),
    ("NOK", 9.8040),
    ("HRK", 7.4210),
    ("RUB", 74.4208),
    ("TRY", 6.1247),
    ("AUD", 1.6072),
    ("BRL", 4.2682),
    ("CAD", 1.5128),
    ("CNY", 7.5857),
    ("HKD", 8.8743),
    ("IDR", 15999.40),
    ("ILS", 4.0875),
    ("INR", 79.4320),
    ("KRW", 1275.05),
    ("MXN", 21.7999),
    ("MYR", 4.6289),
    ("NZD", 1.6679),
    ("PHP", 59.083),
    ("SGD", 1.5349),
    ("THB", 36.012),
    ("ZAR", 15.9001),
];

/// Errors raised while loading or validating a rate table.
#[derive(Debug, thiserror::Error)]
pub enum RateTableError {
    #[error("rate for {code} must be strictly positive, got {rate}")]
    NonPositiveRate { code: String, rate: f64 },

    #[error("pivot currency {PIVOT_CURRENCY} is missing from the table")]
    MissingPivot,

    #[error("pivot currency {PIVOT_CURRENCY} must have rate 1, got {0}")]
    InvalidPivotRate(f64),

    #[error("failed to read rate table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rate table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only mapping from currency code to its per-pivot rate.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// The built-in storefront rate sheet.
    pub fn builtin() -> Self {
        Self {
            rates: BUILTIN_RATES
                .iter()
                .map(|&(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }

    /// Builds a table from raw entries, validating every rate.
    pub fn from_rates(
        rates: impl IntoIterator<Item = (String, f64)>,
    ) -> Result<Self, RateTableError> {
        let rates: BTreeMap<String, f64> = rates.into_iter().collect();

        for (code, &rate) in &rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateTableError::NonPositiveRate {
                    code: code.clone(),
                    rate,
                });
            }
        }

        match rates.get(PIVOT_CURRENCY) {
            None => return Err(RateTableError::MissingPivot),
            Some(&rate) if rate != 1.0 => return Err(RateTableError::InvalidPivotRate(rate)),
            Some(_) => {}
        }

        Ok(Self { rates })
    }

    /// Parses a flat `{"CODE": rate, ...}` JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, RateTableError> {
        let rates: BTreeMap<String, f64> = serde_json::from_str(json)?;
        Self::from_rates(rates)
    }

    /// Loads and parses a rate table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Rate for a currency code, if present.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Currency codes in sorted order.
    pub fn currency_codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
