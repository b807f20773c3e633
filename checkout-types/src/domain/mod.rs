//! Domain models for the checkout core.

pub mod card;
pub mod money;
pub mod transaction;

pub use card::{CardBrand, CreditCard};
pub use money::{MoneyAmount, RawAmount, NANOS_PER_UNIT};
pub use transaction::TransactionId;
