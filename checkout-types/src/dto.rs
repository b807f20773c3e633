//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CreditCard, MoneyAmount, TransactionId};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount into another currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert; its currency code is the source currency.
    pub from: MoneyAmount,
    /// Target currency code.
    pub to_code: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Charge DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to charge a credit card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Amount to charge. Structurally required, but the simulated charge
    /// does not model insufficient funds, so it never changes the outcome.
    pub amount: MoneyAmount,
    pub credit_card: CreditCard,
}

/// Response after a successful charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResponse {
    /// Unique transaction identifier, fresh per charge.
    pub transaction_id: TransactionId,
}
