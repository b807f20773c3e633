//! Reference clock port.
//!
//! Expiration checks compare against a caller-supplied "now" rather than
//! reading the wall clock internally, so tests can pin a fixed date.

use chrono::{DateTime, Utc};

/// Port trait for the reference clock.
pub trait Clock: Send + Sync {
    /// Current processing time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
