//! Error types for the checkout core.

use crate::domain::CardBrand;

/// Domain-level errors (business rule violations).
///
/// All variants are client-input faults: they are terminal for the call and
/// map to a bad-request condition at the service boundary. Card errors carry
/// at most the last four digits of the number.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("credit card number is malformed")]
    MalformedCardNumber,

    #[error("credit card info is invalid")]
    InvalidCardNumber,

    #[error("sorry, we cannot process {brand} credit cards; only VISA or MasterCard is accepted")]
    UnsupportedCardBrand { brand: CardBrand },

    #[error("the credit card (ending {last4}) expired on {month}/{year}")]
    CardExpired {
        last4: String,
        year: i32,
        month: u32,
    },

    #[error("invalid expiration date: {month}/{year}")]
    InvalidExpiration { year: i32, month: u32 },
}

/// Application-level errors for the service boundary.
///
/// Distinguishes client faults from server-side failures so a transport
/// wrapper can map them to status classes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        // Every domain fault originates from caller input.
        AppError::BadRequest(err.to_string())
    }
}
