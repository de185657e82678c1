//! Time provider abstraction.
//!
//! Domain logic that depends on the current time takes a `DateTimeProvider`
//! as an explicit parameter instead of reading a global clock. This keeps
//! expiration logic deterministic under test.

use chrono::{DateTime, Utc};

mod mock;
mod system;

pub use mock::FixedClock;
pub use system::SystemClock;

/// Capability for reading the current UTC instant.
pub trait DateTimeProvider: Send + Sync {
    /// Returns the current UTC timestamp.
    fn utc_now(&self) -> DateTime<Utc>;
}
