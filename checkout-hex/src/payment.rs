//! Payment Charge Service
//!
//! Simulates charging a credit card: validates the card against the injected
//! clock and mints a transaction id. No ledger is written; persistence is an
//! external collaborator's concern.

use checkout_types::{AppError, ChargeRequest, ChargeResponse, Clock, SystemClock, TransactionId};

/// Application service for simulated charges.
///
/// Generic over `C: Clock` - the reference time source is injected so
/// expiration checks are deterministic under test.
pub struct PaymentService<C: Clock> {
    clock: C,
}

impl<C: Clock> PaymentService<C> {
    /// Creates a new payment service with the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Charges the card in `req`, returning a fresh transaction id.
    ///
    /// Delegates validation entirely to the card domain logic; every failure
    /// surfaces as a bad request. The amount is required but never changes
    /// the outcome - the simulation does not model insufficient funds.
    pub fn charge(&self, req: ChargeRequest) -> Result<ChargeResponse, AppError> {
        let brand = req.credit_card.validate(self.clock.now()).map_err(|err| {
            tracing::info!(last4 = req.credit_card.last4(), error = %err, "charge rejected");
            AppError::from(err)
        })?;

        let transaction_id = TransactionId::new();
        tracing::info!(
            %brand,
            last4 = req.credit_card.last4(),
            amount = %req.amount,
            %transaction_id,
            "charge approved"
        );

        Ok(ChargeResponse { transaction_id })
    }
}

impl PaymentService<SystemClock> {
    /// Production service reading the system wall clock.
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}
