//! # Checkout Hex
//!
//! Application service layer for the storefront checkout core.
//!
//! ## Architecture
//!
//! - `currency` - Currency conversion service over a static rate table
//! - `payment` - Simulated charge service over an injected clock
//!
//! The payment service is generic over `C: Clock`, allowing tests to pin a
//! fixed reference time for expiration checks.

pub mod currency;
pub mod payment;


pub use currency::CurrencyService;
pub use payment::PaymentService;
